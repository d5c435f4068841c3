//! Page shell context.
//!
//! The pitch page provides a `Signal<PageShell>`; nav components read the
//! flags from it and route link clicks through [`navigate`].
//!
//! ## Usage
//!
//! ```ignore
//! // In the page component
//! let shell = use_context_provider(|| Signal::new(PageShell::new(config)));
//!
//! // In child components
//! let shell = use_shell();
//! onclick: move |_| navigate(shell, Section::Location.id()),
//! ```

use casadeoro_core::{NavOutcome, PageShell, Section, ViewportSnapshot};
use dioxus::prelude::*;

use crate::bridge;

/// Hook to access the page shell from context.
pub fn use_shell() -> Signal<PageShell> {
    use_context::<Signal<PageShell>>()
}

/// Close the menu and smooth-scroll to the region with anchor `id`.
///
/// The menu closes immediately. The region is measured in the webview
/// afterwards; if it is absent (or measuring fails) nothing scrolls. The
/// deferred half never touches the menu.
pub fn navigate(mut shell: Signal<PageShell>, id: &'static str) {
    shell.write().close_menu();

    spawn(async move {
        let mut viewport = match bridge::measure_viewport(&[id]).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(target_id = id, error = %e, "Failed to measure viewport");
                ViewportSnapshot::default()
            }
        };

        // The menu was closed at activation; leave any reopen since then alone
        if let NavOutcome::Scrolled(_) = shell.write().scroll_to_region(id, &mut viewport) {
            bridge::perform(viewport.take_requests());
        }
    });
}

/// Navigate to a section
pub fn go_to(shell: Signal<PageShell>, section: Section) {
    navigate(shell, section.id());
}

/// Close the menu and scroll to the top of the page
pub fn scroll_home(mut shell: Signal<PageShell>) {
    shell.write().close_menu();

    spawn(async move {
        let mut viewport = bridge::measure_viewport(&[]).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to measure viewport");
            ViewportSnapshot::default()
        });
        shell.write().scroll_to_offset(0.0, &mut viewport);
        bridge::perform(viewport.take_requests());
    });
}
