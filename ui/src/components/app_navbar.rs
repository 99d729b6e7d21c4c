use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, referenced as an asset and inlined for release native
// builds (same file, so the two can't drift).
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// Each closure receives the display label and returns a link that already
/// contains that label as its child.
pub struct NavBuilder {
    pub welcome: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub comparisons: fn(label: &str) -> Element,
    pub trends: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let welcome = (b.welcome)("Welcome");
        let dashboard = (b.dashboard)("Dashboard");
        let comparisons = (b.comparisons)("State Comparisons");
        let trends = (b.trends)("Trends");
        let about = (b.about)("About");

        rsx! {
            nav { class: "navbar__links",
                {welcome}
                {dashboard}
                {comparisons}
                {trends}
                {about}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "DQ Atlas" }
                    }
                    span { class: "navbar__brand-subtitle", "Medicaid data quality, state by state" }
                }

                if let Some(links) = nav {
                    {links}
                }
            }
        }
    }
}
