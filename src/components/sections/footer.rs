use casadeoro_core::content::FOOTER_LINKS;
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                div { class: "footer-brand",
                    div { class: "footer-logo", "CASA DE ORO" }
                    p { "Modern Mexican Steakhouse & Lounge" }
                }
                div { class: "footer-links",
                    for link in FOOTER_LINKS {
                        a {
                            key: "{link}",
                            href: "#",
                            onclick: move |evt: MouseEvent| evt.prevent_default(),
                            "{link}"
                        }
                    }
                }
            }
            div { class: "footer-legal", "© 2024 Casa De Oro. Confidential Investment Opportunity." }
        }
    }
}
