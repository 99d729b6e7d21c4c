use dioxus::prelude::*;

use crate::components::{DeltaTone, MetricCard};

#[component]
pub fn Welcome() -> Element {
    rsx! {
        section { class: "page page-welcome",
            h1 { "Welcome to the Medicaid Data Quality (DQ) Atlas" }

            div { class: "info-box",
                h3 { "About the DQ Atlas" }
                p {
                    "The Data Quality Atlas is a comprehensive platform for monitoring and "
                    "analyzing the quality of Medicaid and CHIP data across all states. This "
                    "tool helps stakeholders assess data completeness, accuracy, and "
                    "reliability to support better decision-making and program management."
                }
            }

            div { class: "metric-row",
                MetricCard {
                    label: "States Monitored",
                    value: "50+",
                    delta: "All US States",
                }
                MetricCard {
                    label: "Data Elements",
                    value: "1,000+",
                    delta: "Comprehensive Coverage",
                }
                MetricCard {
                    label: "Average Quality Score",
                    value: "88%",
                    delta: "+2.3%",
                    tone: DeltaTone::Up,
                }
                MetricCard {
                    label: "Last Updated",
                    value: "Oct 2024",
                    delta: "Monthly Updates",
                }
            }

            hr {}

            h2 { "Key Features" }
            div { class: "feature-columns",
                div { class: "feature-column",
                    h3 { "Comprehensive Assessments" }
                    ul {
                        li { "Enrollment data quality metrics" }
                        li { "Claims accuracy assessments" }
                        li { "Provider information completeness" }
                        li { "Demographic data validation" }
                    }

                    h3 { "State-by-State Analysis" }
                    ul {
                        li { "Compare quality metrics across states" }
                        li { "Identify areas for improvement" }
                        li { "Track progress over time" }
                    }
                }
                div { class: "feature-column",
                    h3 { "Trend Analysis" }
                    ul {
                        li { "Historical data quality trends" }
                        li { "Seasonal patterns identification" }
                        li { "Predictive insights" }
                    }

                    h3 { "Actionable Insights" }
                    ul {
                        li { "Data-driven recommendations" }
                        li { "Best practice sharing" }
                        li { "Quality improvement strategies" }
                    }
                }
            }
        }
    }
}
