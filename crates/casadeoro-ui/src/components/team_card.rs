//! Leadership card

use casadeoro_core::content::TeamMember;
use dioxus::prelude::*;

/// Name, role, and an optional blurb with a gold left rule
#[component]
pub fn TeamCard(member: TeamMember) -> Element {
    rsx! {
        div { class: "team-card",
            h3 { "{member.name}" }
            p { class: "team-role", "{member.role}" }
            if let Some(description) = member.description {
                p { class: "team-desc", "{description}" }
            }
        }
    }
}
