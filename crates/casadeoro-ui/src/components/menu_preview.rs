//! Menu highlight grid

use casadeoro_core::content::MENU_ITEMS;
use dioxus::prelude::*;

use super::{Icon, Lucide};

#[component]
pub fn MenuPreview() -> Element {
    rsx! {
        div { class: "menu-grid",
            for item in MENU_ITEMS.iter() {
                div { key: "{item.name}", class: "menu-card",
                    Lucide { icon: Icon::Utensils, size: 20, class: "menu-card-icon".to_string() }
                    h4 { "{item.name}" }
                    p { "{item.description}" }
                }
            }
        }
    }
}
