//! Shared UI crate for DQ Atlas. All views, components, and core logic live here.

pub mod charts;
pub mod core;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod data_table;
    pub use data_table::SnapshotTable;

    pub mod export_panel;
    pub use export_panel::ExportPanel;

    pub mod metric_card;
    pub use metric_card::{DeltaTone, MetricCard};

    pub mod selectors;
    pub use selectors::{
        MetricView, MetricViewSelect, RatingSelect, StateMultiSelect, StateSelect,
    };
}
