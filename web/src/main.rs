use dioxus::prelude::*;
use rand::thread_rng;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::data::AtlasData;
use ui::views::{About, Comparisons, Dashboard, Trends, Welcome};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Welcome {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/comparisons")]
    Comparisons {},
    #[route("/trends")]
    Trends {},
    #[route("/about")]
    About {},
}

// Embedded shared theme (ui/assets/theme/main.css); web and desktop render
// from the same stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_welcome(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Welcome {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_comparisons(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Comparisons {}, "{label}" })
}
fn nav_trends(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Trends {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        welcome: nav_welcome,
        dashboard: nav_dashboard,
        comparisons: nav_comparisons,
        trends: nav_trends,
        about: nav_about,
    });

    // Sample tables are drawn once per session and shared with every view.
    use_context_provider(|| AtlasData::sample(&mut thread_rng()));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
