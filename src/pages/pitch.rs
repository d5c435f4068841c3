//! The pitch page - the whole single-page site.
//!
//! Owns the page shell: provides it to the nav components, listens to
//! window scroll while mounted, and lays out the sections.

use std::rc::Rc;

use casadeoro_core::{PageShell, ScrollSignal};
use dioxus::prelude::*;

use crate::bridge;
use crate::context::go_to;
use crate::components::sections::{
    ContactSection, ExperienceSection, FinancialsSection, HeroSection, LocationSection,
    SiteFooter, VisionSection,
};
use crate::components::{MobileMenu, NavBar};

/// Page shell component.
///
/// The scroll subscription lives exactly as long as this component: it is
/// registered once on mount and dropped (detaching the listener) on unmount.
#[component]
pub fn Pitch() -> Element {
    let mut shell = use_context_provider(|| Signal::new(PageShell::new(crate::get_site_config())));
    let scroll = use_hook(ScrollSignal::new);

    // Only write when the flag flips, so plain scrolling doesn't re-render
    let _subscription = use_hook(|| {
        Rc::new(scroll.subscribe(move |offset| {
            let current = shell.peek();
            let flips = current.is_past_threshold(offset) != current.scrolled();
            drop(current);
            if flips {
                shell.write().observe_scroll(offset);
            }
        }))
    });

    // Feed webview scroll events into the signal (task ends with the scope)
    use_hook(|| spawn(bridge::pump_scroll_offsets(scroll.clone())));
    use_drop(bridge::detach_scroll_listener);

    // Jump to the configured start section once the sections are in the DOM
    use_effect(move || {
        let start = shell.peek().config().start_section;
        if let Some(section) = start {
            tracing::debug!(%section, "Opening at start section");
            go_to(shell, section);
        }
    });

    rsx! {
        div { class: "page",
            NavBar {}
            MobileMenu {}
            HeroSection {}

            main {
                VisionSection {}
                ExperienceSection {}
                LocationSection {}
                FinancialsSection {}
                ContactSection {}
            }

            SiteFooter {}
        }
    }
}
