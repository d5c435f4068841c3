//! Architectural scene behind the experience quote: two crossed rings and
//! two dark stones, turning slowly as one group.

use std::f64::consts::FRAC_PI_2;

use super::math::{project_ring, Camera, Euler, FloatMotion, Vec3};
use super::{Orb, Ring, SceneFrame, Shape, GOLD};

const CAMERA: Camera = Camera::new(5.0, 50.0);
const GROUP: FloatMotion = FloatMotion::new(0.5, 0.2, 0.2);
const GROUP_ROTATION: Euler = Euler::new(0.5, 0.5, 0.0);

const RING_TUBE: f64 = 0.02;
const STONE: &str = "#1a1a1a";
const GRAPHITE: &str = "#333333";

struct RingSpec {
    radius: f64,
    orientation: Euler,
    color: &'static str,
}

const RINGS: [RingSpec; 2] = [
    RingSpec { radius: 2.0, orientation: Euler::new(0.0, 0.0, 0.0), color: GRAPHITE },
    RingSpec { radius: 1.5, orientation: Euler::new(0.0, FRAC_PI_2, 0.0), color: GOLD },
];

const STONES: [(Vec3, f64); 2] = [
    (Vec3::new(1.0, 1.0, 0.0), 0.5),
    (Vec3::new(-1.0, -1.0, 0.5), 0.3),
];

/// Ambient scene for the experience section
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchitectureScene;

impl ArchitectureScene {
    pub fn frame(&self, t: f64, width: f64, height: f64) -> SceneFrame {
        let mut frame = SceneFrame::new(width, height);
        let wobble = GROUP.wobble(t);
        let lift = Vec3::new(0.0, GROUP.lift(t), 0.0);

        for ring in &RINGS {
            let normal = Vec3::Z.rotate(ring.orientation).rotate(GROUP_ROTATION).rotate(wobble);
            if let Some(outline) = project_ring(&CAMERA, lift, ring.radius, normal, width, height) {
                let stroke_width = (RING_TUBE * 2.0 * outline.rx / ring.radius).max(1.0);
                frame.shapes.push(Shape::Ring(Ring {
                    outline,
                    color: ring.color,
                    stroke_width,
                    glow: false,
                }));
            }
        }

        for (position, radius) in STONES {
            let world = position.rotate(GROUP_ROTATION).rotate(wobble) + lift;
            if let Some(p) = CAMERA.project(world, width, height) {
                frame.shapes.push(Shape::Orb(Orb {
                    cx: p.x,
                    cy: p.y,
                    r: radius * p.scale,
                    color: STONE,
                    highlight_degrees: -45.0,
                    depth: p.depth,
                }));
            }
        }

        frame.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_contains_two_rings_and_two_stones() {
        let frame = ArchitectureScene.frame(0.0, 600.0, 600.0);
        assert_eq!(frame.shapes.len(), 4);
        assert!(frame.sparks.is_empty());
    }

    #[test]
    fn rings_are_centred_on_group() {
        let frame = ArchitectureScene.frame(2.0, 600.0, 600.0);
        for shape in &frame.shapes {
            if let Shape::Ring(ring) = shape {
                assert!((ring.outline.cx - 300.0).abs() < 1.0);
                assert!(ring.outline.ry <= ring.outline.rx + 1e-9);
            }
        }
    }

    #[test]
    fn larger_ring_projects_larger() {
        let frame = ArchitectureScene.frame(0.0, 600.0, 600.0);
        let radii: Vec<(&str, f64)> = frame
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Ring(r) => Some((r.color, r.outline.rx)),
                Shape::Orb(_) => None,
            })
            .collect();
        let graphite = radii.iter().find(|(c, _)| *c == GRAPHITE).unwrap().1;
        let gold = radii.iter().find(|(c, _)| *c == GOLD).unwrap().1;
        assert!(graphite > gold);
    }
}
