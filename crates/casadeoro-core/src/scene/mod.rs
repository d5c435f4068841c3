//! Decorative scenes.
//!
//! Both scenes are ambient: they take a clock value and a viewport size and
//! return flat 2D shapes, back to front, for the UI to draw as SVG. They hold
//! no state that affects anything else on the page.

mod architecture;
mod hero;
pub mod math;

pub use architecture::ArchitectureScene;
pub use hero::HeroScene;
pub use math::{Camera, Euler, FloatMotion, Projected, RingOutline, Vec3};

/// Brand gold used for metal and light
pub const GOLD: &str = "#C5A059";

/// A shaded sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: &'static str,
    /// Angle of the specular highlight in degrees
    pub highlight_degrees: f64,
    pub depth: f64,
}

/// A thin torus seen as an ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub outline: RingOutline,
    pub color: &'static str,
    pub stroke_width: f64,
    /// Whether the ring glows (emissive material)
    pub glow: bool,
}

/// A twinkling point of light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub opacity: f64,
}

/// Any drawable element of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Orb(Orb),
    Ring(Ring),
}

impl Shape {
    fn depth(&self) -> f64 {
        match self {
            Shape::Orb(orb) => orb.depth,
            Shape::Ring(ring) => ring.outline.depth,
        }
    }
}

/// Everything to draw for one instant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneFrame {
    pub width: f64,
    pub height: f64,
    /// Sorted far to near
    pub shapes: Vec<Shape>,
    pub sparks: Vec<Spark>,
}

impl SceneFrame {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn finish(mut self) -> Self {
        self.shapes
            .sort_by(|a, b| b.depth().total_cmp(&a.depth()));
        self
    }
}
