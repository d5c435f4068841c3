//! Investment Allocation Chart
//!
//! One horizontal bar per line item. Bars grow from zero when the chart
//! scrolls into view, staggered top to bottom.

use casadeoro_core::content::{bar_delay_secs, InvestmentItem, INVESTMENT_ITEMS, TI_ALLOWANCE_NOTE};
use dioxus::prelude::*;

use super::REVEAL;

/// Inline style for a bar fill: target width, color and reveal delay.
///
/// The width is carried in a custom property so CSS can animate from zero.
pub fn bar_style(item: &InvestmentItem, index: usize) -> String {
    format!(
        "--bar-width: {:.2}%; background: {}; transition-delay: {:.1}s;",
        item.bar_width_percent(),
        item.color,
        bar_delay_secs(index)
    )
}

#[component]
pub fn InvestmentChart() -> Element {
    rsx! {
        div { class: "chart-card investment-chart",
            h3 { class: "chart-title", "Investment Allocation" }
            p { class: "chart-subtitle", "Total Capital Requirement: $2.5 Million" }

            div { class: "allocation-rows",
                for (index, item) in INVESTMENT_ITEMS.iter().enumerate() {
                    {
                        let style = bar_style(item, index);
                        rsx! {
                            div { key: "{item.label}", class: "allocation-row",
                                div { class: "allocation-labels",
                                    span { "{item.label}" }
                                    span { "{item.display_value()}" }
                                }
                                div { class: "allocation-track",
                                    div {
                                        class: "allocation-bar",
                                        "data-reveal": REVEAL,
                                        style: "{style}",
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "chart-footer",
                span { class: "gold-dot" }
                span { "{TI_ALLOWANCE_NOTE}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bar_style() {
        let style = bar_style(&INVESTMENT_ITEMS[0], 0);
        assert_eq!(
            style,
            "--bar-width: 86.67%; background: #2A2825; transition-delay: 0.0s;"
        );
    }

    #[test]
    fn later_bars_are_delayed() {
        let style = bar_style(&INVESTMENT_ITEMS[6], 6);
        assert!(style.contains("--bar-width: 5.00%"));
        assert!(style.ends_with("transition-delay: 0.6s;"));
    }
}
