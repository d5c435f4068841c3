//! Location Diagram
//!
//! A stylized street map of the flagship corner: a faint grid, the two
//! streets, the Casa De Oro marker, a pulsing radius, and a callout card.

use casadeoro_core::content::{MAP_AVENUE, MAP_GRID, MAP_STREET};
use dioxus::prelude::*;

#[component]
pub fn LocationViz() -> Element {
    let mut hovered = use_signal(|| false);
    let (cols, rows) = MAP_GRID;
    let cells = cols * rows;

    let marker_class = if hovered() { "map-marker hovered" } else { "map-marker" };

    rsx! {
        div { class: "location-viz",
            div {
                class: "map-grid",
                style: "grid-template-columns: repeat({cols}, 1fr); grid-template-rows: repeat({rows}, 1fr);",
                for i in 0..cells {
                    div { key: "{i}", class: "map-cell" }
                }
            }

            div { class: "map-avenue",
                span { "{MAP_AVENUE.name}" }
                span { "{MAP_AVENUE.note}" }
            }

            div { class: "map-street",
                span { class: "rotated", "{MAP_STREET.name}" }
                span { class: "rotated", "{MAP_STREET.note}" }
            }

            div {
                class: "{marker_class}",
                onmouseenter: move |_| {
                    tracing::trace!("Location marker hovered");
                    hovered.set(true);
                },
                onmouseleave: move |_| hovered.set(false),
                span { "C" }
            }

            div { class: "map-callout",
                h4 { "Prime Corner Location" }
                p {
                    "Intersection of highest pedestrian activity. Directly across from Food Lab, walking distance to Mission Inn."
                }
            }

            div { class: "map-pulse" }
        }
    }
}
