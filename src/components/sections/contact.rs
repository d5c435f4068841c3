//! Strategic leadership and the invest card

use casadeoro_core::content::{PITCH_TERMS, TEAM};
use casadeoro_core::Section;
use casadeoro_ui::{Button, ButtonVariant, TeamCard};
use dioxus::prelude::*;

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: Section::Contact.id(), class: "section section-dark section-top-rule",
            div { class: "container contact-grid",
                div {
                    h2 { class: "section-title section-title-light", "Strategic Leadership" }
                    div { class: "team-list",
                        for member in TEAM {
                            TeamCard { key: "{member.name}", member }
                        }
                    }
                }

                div { class: "invest-card",
                    h2 { "Invest in Casa De Oro" }
                    p { class: "invest-lede", "Be part of the Inland Empire's new flagship luxury destination." }

                    div { class: "invest-terms",
                        for (label, value) in PITCH_TERMS {
                            div { key: "{label}", class: "invest-term",
                                span { class: "invest-term-label", "{label}" }
                                span { class: "invest-term-value", "{value}" }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Solid,
                        class: "invest-button".to_string(),
                        onclick: move |_| tracing::info!("Pitch deck requested"),
                        "Request Pitch Deck"
                    }
                }
            }
        }
    }
}
