//! Financials: allocation bars, revenue donut and growth note

use casadeoro_core::content::EXPANSION_MARKETS;
use casadeoro_core::Section;
use casadeoro_ui::{InvestmentChart, RevenueChart};
use dioxus::prelude::*;

#[component]
pub fn FinancialsSection() -> Element {
    rsx! {
        section { id: Section::Financials.id(), class: "section section-cream",
            div { class: "container",
                div { class: "section-intro",
                    div { class: "eyebrow", "THE NUMBERS" }
                    h2 { class: "section-title", "Financial Overview" }
                    p { class: "section-lede-dark",
                        "Casa De Oro is engineered for profitability through high-margin bar sales, premium menu pricing, and operational efficiency."
                    }
                }

                div { class: "financials-grid",
                    InvestmentChart {}
                    div { class: "financials-side",
                        RevenueChart {}
                        div { class: "growth-note",
                            h4 { "Scalability & Growth" }
                            p { "{EXPANSION_MARKETS}" }
                        }
                    }
                }
            }
        }
    }
}
