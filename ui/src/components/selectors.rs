//! Filter widgets shared by the dashboard pages.
//!
//! Every selector parses its widget value back into the closed vocabulary it
//! was rendered from; a value that fails to parse leaves the current
//! selection untouched.

use dioxus::prelude::*;

use crate::core::data::{TrendMetric, STATES};
use crate::core::filter::RatingFilter;

/// Checkbox multiselect over the fixed state list.
#[component]
pub fn StateMultiSelect(mut selected: Signal<Vec<String>>) -> Element {
    let current = selected();

    rsx! {
        fieldset { class: "selector selector--multi",
            legend { class: "selector__label", "Filter by States:" }
            div { class: "selector__options",
                for state in STATES.iter() {
                    label { class: "selector__option",
                        input {
                            r#type: "checkbox",
                            checked: current.iter().any(|s| s == state),
                            oninput: {
                                let state = (*state).to_string();
                                move |evt: Event<FormData>| {
                                    let mut picks = selected();
                                    if evt.checked() {
                                        if !picks.contains(&state) {
                                            picks.push(state.clone());
                                        }
                                    } else {
                                        picks.retain(|s| s != &state);
                                    }
                                    selected.set(picks);
                                }
                            },
                        }
                        "{state}"
                    }
                }
            }
        }
    }
}

/// Single-choice state dropdown.
#[component]
pub fn StateSelect(label: String, mut selected: Signal<String>, id: String) -> Element {
    let current = selected();

    rsx! {
        div { class: "selector",
            label { class: "selector__label", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                value: "{current}",
                oninput: move |evt: Event<FormData>| {
                    let value = evt.value();
                    if STATES.contains(&value.as_str()) {
                        selected.set(value);
                    }
                },
                for state in STATES.iter() {
                    option { value: "{state}", selected: *state == current, "{state}" }
                }
            }
        }
    }
}

/// Quality-rating dropdown (All / Low / Medium / High Concern).
#[component]
pub fn RatingSelect(mut selected: Signal<RatingFilter>) -> Element {
    let current = selected();

    rsx! {
        div { class: "selector",
            label { class: "selector__label", r#for: "rating-select", "Quality Rating:" }
            select {
                id: "rating-select",
                value: "{current.label()}",
                oninput: move |evt: Event<FormData>| {
                    if let Some(choice) = RatingFilter::parse(&evt.value()) {
                        selected.set(choice);
                    }
                },
                for choice in RatingFilter::CHOICES {
                    option {
                        value: "{choice.label()}",
                        selected: choice == current,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}

/// Which trend series to plot: all three, or a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricView {
    #[default]
    AllMetrics,
    Single(TrendMetric),
}

impl MetricView {
    pub const CHOICES: [Self; 4] = [
        Self::AllMetrics,
        Self::Single(TrendMetric::Enrollment),
        Self::Single(TrendMetric::Claims),
        Self::Single(TrendMetric::Provider),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AllMetrics => "All Metrics",
            Self::Single(metric) => metric.label(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::CHOICES.into_iter().find(|c| c.label() == value)
    }
}

/// Metric-view dropdown for the trends page.
#[component]
pub fn MetricViewSelect(mut selected: Signal<MetricView>) -> Element {
    let current = selected();

    rsx! {
        div { class: "selector",
            label { class: "selector__label", r#for: "metric-view-select", "Select Metric to Visualize:" }
            select {
                id: "metric-view-select",
                value: "{current.label()}",
                oninput: move |evt: Event<FormData>| {
                    if let Some(choice) = MetricView::parse(&evt.value()) {
                        selected.set(choice);
                    }
                },
                for choice in MetricView::CHOICES {
                    option {
                        value: "{choice.label()}",
                        selected: choice == current,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_view_parse_round_trips_labels() {
        for choice in MetricView::CHOICES {
            assert_eq!(MetricView::parse(choice.label()), Some(choice));
        }
        assert_eq!(MetricView::parse("Bogus"), None);
    }
}
