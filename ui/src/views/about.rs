use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { "About the DQ Atlas" }

            div { class: "info-box",
                h3 { "Mission Statement" }
                p {
                    "The Medicaid Data Quality Atlas serves as a comprehensive resource for "
                    "assessing and improving the quality of Medicaid and CHIP data. Our "
                    "mission is to provide transparent, actionable insights that support "
                    "better program management and improved outcomes for beneficiaries."
                }
            }

            hr {}

            div { class: "feature-columns",
                div { class: "feature-column",
                    h2 { "What is the DQ Atlas?" }
                    p { "The Data Quality (DQ) Atlas is an interactive platform that:" }
                    ul {
                        li { strong { "Monitors" } " data quality across all states" }
                        li { strong { "Identifies" } " areas requiring improvement" }
                        li { strong { "Tracks" } " progress over time" }
                        li { strong { "Provides" } " actionable recommendations" }
                        li { strong { "Supports" } " data-driven decision making" }
                    }

                    h2 { "Data Sources" }
                    p { "Our assessments are based on:" }
                    ul {
                        li { "Transformed Medicaid Statistical Information System (T-MSIS)" }
                        li { "State-submitted data files" }
                        li { "Quality validation processes" }
                        li { "Automated data quality checks" }
                    }
                }
                div { class: "feature-column",
                    h2 { "Quality Metrics" }
                    p { "We evaluate data across multiple dimensions:" }
                    ul {
                        li { strong { "Completeness" } ": Presence of required data elements" }
                        li { strong { "Accuracy" } ": Correctness of reported information" }
                        li { strong { "Consistency" } ": Alignment across data sources" }
                        li { strong { "Timeliness" } ": Currency of reported data" }
                        li { strong { "Validity" } ": Conformance to expected ranges" }
                    }

                    h2 { "Contact & Resources" }
                    p { "For more information:" }
                    ul {
                        li { "Email: dqatlas@cms.hhs.gov" }
                        li { "Website: medicaid.gov/dq-atlas" }
                        li { "Documentation: Available in Resources section" }
                        li { "Technical Support: 1-800-XXX-XXXX" }
                    }
                }
            }

            hr {}

            p { class: "page-about__note",
                "Note: This is a demo application created for testing purposes. For "
                "official Medicaid DQ Atlas data, please visit "
                "https://www.medicaid.gov/dq-atlas/welcome"
            }
        }
    }
}
