//! The Vision: concept and target audience

use casadeoro_core::content::AUDIENCE;
use casadeoro_core::Section;
use casadeoro_ui::REVEAL;
use dioxus::prelude::*;

#[component]
pub fn VisionSection() -> Element {
    rsx! {
        section { id: Section::Vision.id(), class: "section section-white",
            div { class: "container vision-grid",
                div { class: "vision-aside",
                    div { class: "eyebrow eyebrow-gold", "The Concept" }
                    h2 { class: "section-title", "Approachable Luxury in the Inland Empire" }
                    div { class: "gold-rule" }
                    p { class: "pull-quote",
                        "\"We are filling a void in the Inland Empire that affluent customers have been forced to drive to Orange County or Los Angeles to experience.\""
                    }
                }

                div { class: "vision-body",
                    p {
                        strong { "Casa De Oro" }
                        " will introduce a modern interpretation of Mexican fine dining, blending premium wagyu, prime steaks, Baja coastal seafood, and fire-driven culinary techniques within an elevated, architecturally refined environment."
                    }
                    p {
                        "The concept emphasizes a seductive yet approachable luxury atmosphere supported by an open-kitchen layout, allowing guests to experience craftsmanship, quality ingredients, and contemporary Mexican cuisine in real time."
                    }

                    div { class: "audience-card reveal-fade", "data-reveal": REVEAL,
                        h3 { "Target Audience" }
                        ul { class: "dot-list",
                            for item in AUDIENCE {
                                li { key: "{item.title}",
                                    span { class: "gold-dot" }
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
}
