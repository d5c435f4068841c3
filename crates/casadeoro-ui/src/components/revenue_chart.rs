//! Revenue Projection Card
//!
//! First-year figures beside a donut ring showing the profit margin. The
//! ring's gold stroke sweeps in when the card scrolls into view.

use casadeoro_core::content::{DONUT_DASH, DONUT_REVEALED_OFFSET, REVENUE};
use dioxus::prelude::*;

use super::{Icon, Lucide, REVEAL};

/// Inline style for the donut stroke: hidden until revealed
pub fn donut_style() -> String {
    format!(
        "stroke-dasharray: {dash}; stroke-dashoffset: {dash}; --donut-revealed: {revealed};",
        dash = DONUT_DASH,
        revealed = DONUT_REVEALED_OFFSET
    )
}

#[component]
pub fn RevenueChart() -> Element {
    let blurb = format!(
        "Based on conservative estimates of {} guests/day with a ${} average ticket. Strong bar programs typically drive margins higher than the conservative {}% modeled here.",
        REVENUE.guests_per_day, REVENUE.average_ticket, REVENUE.margin_percent
    );
    let donut = donut_style();

    rsx! {
        div { class: "chart-card revenue-chart",
            div { class: "revenue-copy",
                div { class: "pill pill-gold",
                    Lucide { icon: Icon::TrendingUp, size: 14 }
                    " First Year Projections"
                }
                h3 { class: "chart-title light", "Projected Cash Flow" }
                p { class: "revenue-blurb", "{blurb}" }

                div { class: "revenue-figures",
                    div { class: "revenue-figure",
                        div { class: "figure-label", "Gross Revenue" }
                        div { class: "figure-value", "{REVENUE.gross_revenue_label}" }
                    }
                    div { class: "revenue-figure",
                        div { class: "figure-label", "Net Profit" }
                        div { class: "figure-value gold", "{REVENUE.net_profit_label}" }
                    }
                }
            }

            div { class: "donut",
                div { class: "donut-center",
                    div { class: "donut-value", "{REVENUE.margin_percent}%" }
                    div { class: "donut-label", "Profit Margin" }
                }
                svg { class: "donut-ring", "aria-hidden": "true",
                    circle {
                        cx: "50%",
                        cy: "50%",
                        r: "48%",
                        fill: "none",
                        stroke: "#333",
                        stroke_width: "2",
                    }
                    circle {
                        class: "donut-sweep",
                        "data-reveal": REVEAL,
                        cx: "50%",
                        cy: "50%",
                        r: "48%",
                        fill: "none",
                        stroke: "#C5A059",
                        stroke_width: "4",
                        style: "{donut}",
                    }
                }
            }
        }
    }
}
