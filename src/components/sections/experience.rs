//! Experience: menu, cocktail bar and the architecture scene

use casadeoro_core::Section;
use casadeoro_ui::{Icon, Lucide, MenuPreview};
use dioxus::prelude::*;

use crate::components::scenes::ArchitectureBackdrop;

#[component]
pub fn ExperienceSection() -> Element {
    rsx! {
        section { id: Section::Experience.id(), class: "section section-dark experience",
            // Blurred glow blobs
            div { class: "experience-glow",
                div { class: "glow glow-gold" }
                div { class: "glow glow-stone" }
            }

            div { class: "container experience-inner",
                div { class: "section-intro",
                    div { class: "pill pill-dark",
                        Lucide { icon: Icon::Flame, size: 14 }
                        " Culinary & Design"
                    }
                    h2 { class: "section-title section-title-xl", "Seductive Ambience" }
                    p { class: "section-lede",
                        "Matte black, gold accents, textured stone, and warm indirect lighting create a design language that signals luxury the moment guests walk in."
                    }
                }

                div { class: "experience-grid",
                    div { class: "experience-copy",
                        div {
                            h3 { class: "feature-title",
                                Lucide { icon: Icon::Utensils, class: "icon-gold".to_string() }
                                " Core Offerings"
                            }
                            MenuPreview {}
                        }

                        div { class: "feature-divided",
                            h3 { class: "feature-title",
                                Lucide { icon: Icon::Wine, class: "icon-gold".to_string() }
                                " High-End Cocktail Bar"
                            }
                            p { class: "muted",
                                "A social centerpiece featuring mixology-driven offerings inspired by coastal and fire-driven Mexican flavors. Emphasizing premium tequilas and mezcals."
                            }
                        }
                    }

                    div { class: "scene-panel",
                        ArchitectureBackdrop {}
                        div { class: "scene-quote",
                            p {
                                "\"We are not creating another restaurant. We are creating a prestige environment that positions us as the Inland Empire's first true luxury Mexican concept.\""
                            }
                        }
                    }
                }
            }
        }
    }
}
