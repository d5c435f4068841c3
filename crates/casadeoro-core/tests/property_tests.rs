//! Property-based tests for the page shell
//!
//! Uses proptest to check the shell invariants over arbitrary event sequences.

use proptest::prelude::*;
use casadeoro_core::{NavOutcome, PageShell, Section, SiteConfig, ViewportSnapshot};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Scroll offsets, including negative overscroll
fn offset_strategy() -> impl Strategy<Value = f64> {
    -200.0f64..20_000.0
}

/// Any anchor id, known or not
fn target_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(Section::ALL.to_vec()).prop_map(|s| s.id().to_string()),
        1 => "[a-z]{1,12}",
    ]
}

/// Events the shell can receive
#[derive(Debug, Clone)]
enum ShellEvent {
    Scroll(f64),
    ToggleMenu,
    Navigate(String),
}

fn events_strategy(max: usize) -> impl Strategy<Value = Vec<ShellEvent>> {
    prop::collection::vec(
        prop_oneof![
            4 => offset_strategy().prop_map(ShellEvent::Scroll),
            2 => Just(ShellEvent::ToggleMenu),
            2 => target_strategy().prop_map(ShellEvent::Navigate),
        ],
        0..max,
    )
}

/// Snapshot where only some sections exist
fn snapshot_strategy() -> impl Strategy<Value = ViewportSnapshot> {
    (
        offset_strategy(),
        prop::collection::vec((prop::sample::select(Section::ALL.to_vec()), -3000.0f64..8000.0), 0..5),
    )
        .prop_map(|(offset, regions)| {
            regions
                .into_iter()
                .fold(ViewportSnapshot::new(offset), |snap, (section, top)| snap.with_region(section.id(), top))
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// `scrolled` always equals `offset > 50` for the latest offset
    #[test]
    fn scrolled_is_derived_from_offset(offsets in prop::collection::vec(offset_strategy(), 1..50)) {
        let mut shell = PageShell::new(SiteConfig::default());
        for offset in offsets {
            shell.observe_scroll(offset);
            prop_assert_eq!(shell.scrolled(), offset > 50.0);
        }
    }

    /// Toggling twice is the identity
    #[test]
    fn double_toggle_is_identity(events in events_strategy(30)) {
        let mut shell = PageShell::new(SiteConfig::default());
        let mut snapshot = ViewportSnapshot::new(0.0);
        for event in events {
            match event {
                ShellEvent::Scroll(o) => { shell.observe_scroll(o); }
                ShellEvent::ToggleMenu => shell.toggle_menu(),
                ShellEvent::Navigate(id) => { shell.navigate(&id, &mut snapshot); }
            }
        }
        let before = shell.state();
        shell.toggle_menu();
        shell.toggle_menu();
        prop_assert_eq!(shell.state(), before);
    }

    /// The menu is closed after every navigation, found or not
    #[test]
    fn navigation_always_closes_menu(
        events in events_strategy(40),
        mut snapshot in snapshot_strategy(),
    ) {
        let mut shell = PageShell::new(SiteConfig::default());
        let mut last_offset: Option<f64> = None;
        for event in events {
            match event {
                ShellEvent::Scroll(o) => {
                    shell.observe_scroll(o);
                    last_offset = Some(o);
                }
                ShellEvent::ToggleMenu => shell.toggle_menu(),
                ShellEvent::Navigate(id) => {
                    let outcome = shell.navigate(&id, &mut snapshot);
                    prop_assert!(!shell.menu_open());
                    let found = snapshot.regions.contains_key(&id);
                    prop_assert_eq!(matches!(outcome, NavOutcome::Scrolled(_)), found);
                }
            }
            if let Some(o) = last_offset {
                prop_assert_eq!(shell.scrolled(), o > 50.0);
            }
        }
    }

    /// A found target scrolls to `top + offset - clearance`, exactly once
    #[test]
    fn destination_formula(
        offset in offset_strategy(),
        top in -3000.0f64..8000.0,
        clearance in 0.0f64..300.0,
        section in prop::sample::select(Section::ALL.to_vec()),
    ) {
        let config = SiteConfig { header_clearance: clearance, ..SiteConfig::default() };
        let mut shell = PageShell::new(config);
        let mut snapshot = ViewportSnapshot::new(offset).with_region(section.id(), top);

        shell.navigate(section.id(), &mut snapshot);
        let requests = snapshot.take_requests();
        prop_assert_eq!(requests.len(), 1);
        prop_assert_eq!(requests[0].top, top + offset - clearance);
    }
}
