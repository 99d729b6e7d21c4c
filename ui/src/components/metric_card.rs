use dioxus::prelude::*;

/// Tone of the delta line under a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaTone {
    Up,
    Down,
    #[default]
    Neutral,
}

impl DeltaTone {
    /// Positive deltas read as improvement for every metric on these pages.
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else if value < 0.0 {
            Self::Down
        } else {
            Self::Neutral
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Self::Up => "metric-card__delta metric-card__delta--up",
            Self::Down => "metric-card__delta metric-card__delta--down",
            Self::Neutral => "metric-card__delta",
        }
    }
}

/// Stat card: label, headline value, optional delta line.
#[component]
pub fn MetricCard(label: String, value: String, delta: Option<String>, tone: Option<DeltaTone>) -> Element {
    let tone_class = tone.unwrap_or_default().css_class();

    rsx! {
        div { class: "metric-card",
            span { class: "metric-card__label", "{label}" }
            strong { class: "metric-card__value", "{value}" }
            if let Some(delta) = delta {
                span { class: "{tone_class}", "{delta}" }
            }
        }
    }
}
