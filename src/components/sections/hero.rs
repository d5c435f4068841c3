//! Hero header

use casadeoro_core::Section;
use casadeoro_ui::{Icon, Lucide};
use dioxus::prelude::*;

use crate::components::scenes::HeroBackdrop;
use crate::context::{go_to, use_shell};

/// Full-height title block over the floating gold scene
#[component]
pub fn HeroSection() -> Element {
    let shell = use_shell();

    rsx! {
        header { class: "hero",
            HeroBackdrop {}

            div { class: "hero-content",
                div { class: "hero-badge", "Investment Opportunity" }
                h1 { class: "hero-title", "CASA DE ORO" }
                p { class: "hero-tagline", "Modern Mexican Steakhouse & Lounge" }

                div { class: "hero-explore-row",
                    a {
                        class: "hero-explore",
                        href: "{Section::Vision.href()}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            go_to(shell, Section::Vision);
                        },
                        span { "EXPLORE" }
                        span { class: "hero-explore-ring",
                            Lucide { icon: Icon::ArrowDown, size: 16 }
                        }
                    }
                }
            }
        }
    }
}
