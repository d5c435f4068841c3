//! Casa De Oro Core Library
//!
//! Framework-free logic behind the Casa De Oro pitch page.
//!
//! ## Overview
//!
//! The page is a single scrolling document. The only behavior with rules
//! attached is the page shell:
//!
//! - **Scroll observation**: the nav bar turns solid once the page has
//!   scrolled past a threshold ([`PageShell::observe_scroll`]).
//! - **Section navigation**: links smooth-scroll a section to just below the
//!   fixed header and always close the mobile menu ([`PageShell::navigate`]).
//! - **Mobile menu**: a single open/closed flag ([`PageShell::toggle_menu`]).
//!
//! Everything else in this crate is display data ([`content`]) and the math
//! for the two decorative scenes ([`scene`]).
//!
//! ## Quick Start
//!
//! ```
//! use casadeoro_core::{NavOutcome, PageShell, SiteConfig, ViewportSnapshot};
//!
//! let mut shell = PageShell::new(SiteConfig::default());
//! shell.toggle_menu();
//!
//! let mut viewport = ViewportSnapshot::new(0.0).with_region("location", 2400.0);
//! let outcome = shell.navigate("location", &mut viewport);
//!
//! assert!(!shell.menu_open());
//! assert_eq!(outcome.request().map(|r| r.top), Some(2300.0));
//! assert!(matches!(shell.navigate("nowhere", &mut viewport), NavOutcome::TargetMissing));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod scene;
pub mod scroll;
pub mod section;
pub mod shell;
pub mod viewport;

// Re-exports
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use scroll::{ListenerId, ScrollSignal, ScrollSubscription};
pub use section::Section;
pub use shell::{NavOutcome, NavTreatment, PageShell, ShellState};
pub use viewport::{scroll_destination, ScrollBehavior, ScrollRequest, Viewport, ViewportSnapshot};
