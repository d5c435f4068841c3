//! Location: flagship site and map diagram

use casadeoro_core::content::LOCATION_HIGHLIGHTS;
use casadeoro_core::Section;
use casadeoro_ui::{Icon, LocationViz, Lucide};
use dioxus::prelude::*;

#[component]
pub fn LocationSection() -> Element {
    rsx! {
        section { id: Section::Location.id(), class: "section section-white section-bordered",
            div { class: "container location-grid",
                div { class: "location-map",
                    LocationViz {}
                }

                div { class: "location-copy",
                    div { class: "pill pill-light",
                        Lucide { icon: Icon::MapPin, size: 14 }
                        " Flagship Location"
                    }
                    h2 { class: "section-title", "Downtown Riverside" }
                    h3 { class: "location-corner", "Market St. & Mission Inn Ave" }

                    p { class: "section-lede-dark",
                        "A 5,500 sq ft corner space sitting directly across from the Riverside Food Lab and within a short walk of the historic Mission Inn Hotel & Spa."
                    }
                    ul { class: "check-list",
                        for item in LOCATION_HIGHLIGHTS {
                            li { key: "{item.title}",
                                span { class: "check-badge", "✓" }
                                span {
                                    strong { "{item.title}" }
                                    " {item.body}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
