//! Page shell state and navigation.
//!
//! The shell owns the only two pieces of UI state on the page:
//!
//! | Flag | Set by |
//! |------|--------|
//! | `scrolled` | every scroll event: `offset > scroll_threshold` |
//! | `menu_open` | menu button (toggle), any navigation (forced false) |
//!
//! `scrolled` is never assigned anything but the value derived from the
//! latest offset. `menu_open` is false after every navigation, whether or not
//! the target exists.

use crate::config::SiteConfig;
use crate::viewport::{scroll_destination, ScrollBehavior, ScrollRequest, Viewport};

/// Visual treatment of the fixed navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTreatment {
    /// Over the hero, no background
    #[default]
    Transparent,
    /// Past the threshold, dark blurred background
    Solid,
}

impl NavTreatment {
    /// CSS modifier class for the nav bar
    pub fn class(&self) -> &'static str {
        match self {
            NavTreatment::Transparent => "transparent",
            NavTreatment::Solid => "solid",
        }
    }
}

/// The two shell flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl ShellState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn treatment(&self) -> NavTreatment {
        if self.scrolled {
            NavTreatment::Solid
        } else {
            NavTreatment::Transparent
        }
    }
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// The viewport was asked to scroll
    Scrolled(ScrollRequest),
    /// No region had the requested id; nothing scrolled
    TargetMissing,
}

impl NavOutcome {
    pub fn request(&self) -> Option<ScrollRequest> {
        match self {
            NavOutcome::Scrolled(request) => Some(*request),
            NavOutcome::TargetMissing => None,
        }
    }
}

/// Page shell: flags, thresholds, and the scroll request sequence
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    state: ShellState,
    config: SiteConfig,
    next_seq: u64,
    latest: Option<ScrollRequest>,
}

impl PageShell {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn scrolled(&self) -> bool {
        self.state.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    /// Whether an offset is past the scroll threshold (strictly greater)
    pub fn is_past_threshold(&self, offset: f64) -> bool {
        offset > self.config.scroll_threshold
    }

    /// Recompute `scrolled` from a scroll offset.
    ///
    /// Returns true when the flag changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = self.is_past_threshold(offset);
        let changed = scrolled != self.state.scrolled;
        self.state.scrolled = scrolled;
        if changed {
            tracing::trace!(offset, scrolled, "Nav treatment changed");
        }
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
        tracing::debug!(menu_open = self.state.menu_open, "Mobile menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.state.close_menu();
    }

    /// Navigate to the region with anchor `id`.
    ///
    /// Closes the menu first, unconditionally. A missing region drops the
    /// request without error.
    pub fn navigate<V>(&mut self, id: &str, viewport: &mut V) -> NavOutcome
    where
        V: Viewport + ?Sized,
    {
        self.state.close_menu();
        self.scroll_to_region(id, viewport)
    }

    /// Scroll to the region with anchor `id`, leaving the menu alone.
    ///
    /// For callers that closed the menu when the link was activated and
    /// resolve the target later; a menu reopened in between stays open.
    pub fn scroll_to_region<V>(&mut self, id: &str, viewport: &mut V) -> NavOutcome
    where
        V: Viewport + ?Sized,
    {
        let Some(region_top) = viewport.region_top(id) else {
            tracing::debug!(target_id = id, "Navigation target not found, ignoring");
            return NavOutcome::TargetMissing;
        };

        let top = scroll_destination(region_top, viewport.page_offset(), self.config.header_clearance);
        let request = self.scroll_to_offset(top, viewport);
        tracing::debug!(target_id = id, top, seq = request.seq, "Scrolling to section");
        NavOutcome::Scrolled(request)
    }

    /// Navigate to the very top of the page (brand mark).
    pub fn scroll_to_top<V>(&mut self, viewport: &mut V) -> ScrollRequest
    where
        V: Viewport + ?Sized,
    {
        self.state.close_menu();
        self.scroll_to_offset(0.0, viewport)
    }

    /// Issue a request for an absolute offset. Does not touch the menu.
    ///
    /// Jumps instead of animating when the viewport prefers reduced motion.
    pub fn scroll_to_offset<V>(&mut self, top: f64, viewport: &mut V) -> ScrollRequest
    where
        V: Viewport + ?Sized,
    {
        let behavior = if viewport.prefers_reduced_motion() {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };
        let request = self.issue(top, behavior);
        viewport.scroll_to(request);
        request
    }

    /// The most recent request; any earlier one is superseded
    pub fn latest_request(&self) -> Option<ScrollRequest> {
        self.latest
    }

    fn issue(&mut self, top: f64, behavior: ScrollBehavior) -> ScrollRequest {
        self.next_seq += 1;
        let request = ScrollRequest {
            seq: self.next_seq,
            top,
            behavior,
        };
        self.latest = Some(request);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportSnapshot;

    fn shell() -> PageShell {
        PageShell::new(SiteConfig::default())
    }

    #[test]
    fn initial_state_is_closed_and_at_top() {
        let shell = shell();
        assert!(!shell.scrolled());
        assert!(!shell.menu_open());
        assert_eq!(shell.state().treatment(), NavTreatment::Transparent);
        assert!(shell.latest_request().is_none());
    }

    #[test]
    fn threshold_is_strict() {
        let mut shell = shell();
        shell.observe_scroll(50.0);
        assert!(!shell.scrolled());
        shell.observe_scroll(51.0);
        assert!(shell.scrolled());
        assert_eq!(shell.state().treatment(), NavTreatment::Solid);
    }

    #[test]
    fn observe_reports_changes_only() {
        let mut shell = shell();
        assert!(!shell.observe_scroll(10.0));
        assert!(shell.observe_scroll(300.0));
        assert!(!shell.observe_scroll(400.0));
        assert!(shell.observe_scroll(0.0));
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let config = SiteConfig { scroll_threshold: 200.0, ..SiteConfig::default() };
        let mut shell = PageShell::new(config);
        shell.observe_scroll(150.0);
        assert!(!shell.scrolled());
        shell.observe_scroll(201.0);
        assert!(shell.scrolled());
    }

    #[test]
    fn navigate_does_not_touch_scrolled() {
        let mut shell = shell();
        shell.observe_scroll(500.0);
        let mut viewport = ViewportSnapshot::new(500.0).with_region("vision", 20.0);
        shell.navigate("vision", &mut viewport);
        assert!(shell.scrolled());
    }

    #[test]
    fn scroll_to_top_closes_menu() {
        let mut shell = shell();
        shell.toggle_menu();
        let mut viewport = ViewportSnapshot::new(900.0);

        let request = shell.scroll_to_top(&mut viewport);
        assert_eq!(request.top, 0.0);
        assert!(!shell.menu_open());
        assert_eq!(viewport.take_requests(), vec![request]);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut shell = shell();
        shell.close_menu();
        assert!(!shell.menu_open());
        shell.toggle_menu();
        shell.close_menu();
        shell.close_menu();
        assert!(!shell.menu_open());
        assert_eq!(shell.latest_request(), None);
    }

    #[test]
    fn reopened_menu_survives_deferred_resolution() {
        let mut shell = shell();
        shell.toggle_menu();

        // Link activated: menu closes now, target resolves later
        shell.close_menu();
        shell.toggle_menu();

        let mut viewport = ViewportSnapshot::new(300.0).with_region("location", 900.0);
        let outcome = shell.scroll_to_region("location", &mut viewport);

        assert!(shell.menu_open());
        assert_eq!(outcome.request().map(|r| r.top), Some(1100.0));
    }

    #[test]
    fn scroll_to_region_missing_target_leaves_menu() {
        let mut shell = shell();
        shell.toggle_menu();
        let mut viewport = ViewportSnapshot::new(0.0);

        assert_eq!(shell.scroll_to_region("nowhere", &mut viewport), NavOutcome::TargetMissing);
        assert!(shell.menu_open());
        assert!(viewport.take_requests().is_empty());
    }

    #[test]
    fn reduced_motion_jumps_instead_of_animating() {
        let mut shell = shell();
        let mut viewport = ViewportSnapshot::new(0.0)
            .with_region("vision", 800.0)
            .with_reduced_motion(true);

        let request = shell.navigate("vision", &mut viewport).request().unwrap();
        assert_eq!(request.behavior, ScrollBehavior::Instant);
        assert_eq!(shell.scroll_to_top(&mut viewport).behavior, ScrollBehavior::Instant);

        let mut plain = ViewportSnapshot::new(0.0).with_region("vision", 800.0);
        let request = shell.navigate("vision", &mut plain).request().unwrap();
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut shell = shell();
        let mut viewport = ViewportSnapshot::new(0.0)
            .with_region("vision", 800.0)
            .with_region("contact", 5000.0);

        let first = shell.navigate("vision", &mut viewport).request().unwrap();
        let second = shell.navigate("contact", &mut viewport).request().unwrap();
        assert!(second.seq > first.seq);
        assert_eq!(shell.latest_request(), Some(second));
    }

    #[test]
    fn missing_target_keeps_previous_latest() {
        let mut shell = shell();
        let mut viewport = ViewportSnapshot::new(0.0).with_region("vision", 800.0);

        let first = shell.navigate("vision", &mut viewport).request().unwrap();
        assert_eq!(shell.navigate("nowhere", &mut viewport), NavOutcome::TargetMissing);
        assert_eq!(shell.latest_request(), Some(first));
    }
}
