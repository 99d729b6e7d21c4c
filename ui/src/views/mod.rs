mod welcome;
pub use welcome::Welcome;

mod dashboard;
pub use dashboard::Dashboard;

mod comparisons;
pub use comparisons::Comparisons;

mod trends;
pub use trends::Trends;

mod about;
pub use about::About;
