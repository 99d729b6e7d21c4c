#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use rand::thread_rng;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::data::AtlasData;
use ui::views::{About, Comparisons, Dashboard, Trends, Welcome};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("DQ Atlas – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

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
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
