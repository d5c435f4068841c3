//! Mobile Menu Component
//!
//! Full-screen overlay for narrow windows (< 768px). Rendered only while
//! the menu is open; any link closes it and scrolls to its section.

use casadeoro_core::Section;
use dioxus::prelude::*;

use crate::context::{go_to, use_shell};

#[component]
pub fn MobileMenu() -> Element {
    let shell = use_shell();

    if !shell.read().menu_open() {
        return rsx! {};
    }

    rsx! {
        div { class: "mobile-menu",
            for section in Section::MOBILE_MENU {
                a {
                    key: "{section.id()}",
                    class: "mobile-menu-link",
                    href: "{section.href()}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        go_to(shell, section);
                    },
                    "{section.label()}"
                }
            }
        }
    }
}
