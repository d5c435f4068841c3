//! Viewport abstraction used by the navigator.
//!
//! The navigator never touches the document directly. It asks a [`Viewport`]
//! for the current page offset and a region's top edge, then hands back a
//! [`ScrollRequest`]. The desktop app measures once per navigation into a
//! [`ViewportSnapshot`] and replays the queued requests as webview scripts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How the platform should move to a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    /// Jump without animating (reduced motion)
    Instant,
}

impl ScrollBehavior {
    /// Value of the `behavior` option for `window.scrollTo`
    pub fn as_js(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// A numbered request to scroll the page to an absolute offset.
///
/// Requests are fire-and-forget. A later request supersedes an earlier one;
/// `seq` orders them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub seq: u64,
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Script that performs this request in a browser context
    pub fn to_script(&self) -> String {
        format!(
            "window.scrollTo({{ top: {}, behavior: '{}' }});",
            self.top,
            self.behavior.as_js()
        )
    }
}

/// Absolute scroll destination for a region.
///
/// `region_top` is relative to the viewport (as reported by
/// `getBoundingClientRect`), so the current page offset is added back before
/// subtracting the header clearance. The result is not clamped.
pub fn scroll_destination(region_top: f64, page_offset: f64, header_clearance: f64) -> f64 {
    region_top + page_offset - header_clearance
}

/// The page as seen by the navigator
pub trait Viewport {
    /// Current vertical scroll offset of the page
    fn page_offset(&self) -> f64;

    /// Top edge of the region with this anchor id, relative to the viewport.
    /// `None` when no such region exists.
    fn region_top(&self, id: &str) -> Option<f64>;

    /// Start a scroll. Must not block on the animation.
    fn scroll_to(&mut self, request: ScrollRequest);

    /// Whether the user asked the platform to minimise motion
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

/// Point-in-time measurement of the page.
///
/// Scroll requests issued against a snapshot are queued and drained by the
/// caller with [`ViewportSnapshot::take_requests`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub offset: f64,
    #[serde(default)]
    pub regions: HashMap<String, f64>,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(skip)]
    pending: Vec<ScrollRequest>,
}

impl ViewportSnapshot {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Record a region's measured top edge
    pub fn with_region(mut self, id: impl Into<String>, top: f64) -> Self {
        self.regions.insert(id.into(), top);
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Drain the requests issued against this snapshot
    pub fn take_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.pending)
    }
}

impl Viewport for ViewportSnapshot {
    fn page_offset(&self) -> f64 {
        self.offset
    }

    fn region_top(&self, id: &str) -> Option<f64> {
        self.regions.get(id).copied().filter(|top| top.is_finite())
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.pending.push(request);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
