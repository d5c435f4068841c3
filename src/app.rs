use dioxus::prelude::*;

use crate::components::SceneDefs;
use crate::pages::Pitch;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the single pitch page.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        SceneDefs {}
        Pitch {}
    }
}
