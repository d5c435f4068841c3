//! Navigation Bar Component
//!
//! Desktop: brand mark, section links and the Invest call-to-action
//! Mobile: brand mark and the menu toggle (links move to MobileMenu)

use casadeoro_core::{NavTreatment, Section};
use casadeoro_ui::{ButtonVariant, Icon, IconButton, Lucide};
use dioxus::prelude::*;

use crate::context::{go_to, scroll_home, use_shell};

/// Sections with a plain text link in the desktop row
const DESKTOP_LINKS: [Section; 4] = Section::MOBILE_MENU;

/// Fixed navigation bar.
///
/// Transparent over the hero, solid once the page is scrolled past the
/// threshold.
#[component]
pub fn NavBar() -> Element {
    let mut shell = use_shell();

    let state = shell.read().state();
    let treatment = state.treatment();
    let cta_variant = match treatment {
        NavTreatment::Transparent => ButtonVariant::Outline,
        NavTreatment::Solid => ButtonVariant::Gold,
    };

    rsx! {
        nav { class: "site-nav {treatment.class()}",
            div { class: "nav-inner",
                // Brand: back to top
                div {
                    class: "nav-brand",
                    onclick: move |_| scroll_home(shell),
                    "CASA DE ORO"
                }

                div { class: "nav-links",
                    for section in DESKTOP_LINKS {
                        a {
                            key: "{section.id()}",
                            class: "nav-link",
                            href: "{section.href()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                go_to(shell, section);
                            },
                            "{section.label()}"
                        }
                    }
                    a {
                        class: "nav-cta {cta_variant.class()}",
                        href: "{Section::Contact.href()}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            go_to(shell, Section::Contact);
                        },
                        "{Section::Contact.label()}"
                    }
                }

                IconButton {
                    class: "nav-toggle".to_string(),
                    aria_label: if state.menu_open { "Close menu".to_string() } else { "Open menu".to_string() },
                    onclick: move |_| shell.write().toggle_menu(),
                    if state.menu_open {
                        Lucide { icon: Icon::Close }
                    } else {
                        Lucide { icon: Icon::Menu }
                    }
                }
            }
        }
    }
}
