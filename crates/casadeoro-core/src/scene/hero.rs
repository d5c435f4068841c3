//! Hero scene: floating gold spheres, a slow ring, and sparkles.

use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::math::{project_ring, Camera, FloatMotion, Vec3};
use super::{Orb, Ring, SceneFrame, Shape, Spark, GOLD};

const CAMERA: Camera = Camera::new(6.0, 45.0);

const MAIN_GROUP: FloatMotion = FloatMotion::new(1.5, 0.2, 0.5);
const SATELLITE_GROUP: FloatMotion = FloatMotion::new(2.0, 0.5, 1.0);

const RING_RADIUS: f64 = 3.5;
const RING_TUBE: f64 = 0.05;

const SPARK_COUNT: usize = 50;
/// Sparkles fill a cube of this edge length around the origin
const SPARK_SPREAD: f64 = 10.0;
const SPARK_SPEED: f64 = 0.4;
const SPARK_OPACITY: f64 = 0.5;
const SPARK_SIZE_PX: f64 = 2.0;
const SPARK_SEED: u64 = 0xCA5A_DE0;

/// A gold sphere resting at `base`, scaled by `scale`
#[derive(Debug, Clone, Copy)]
struct GoldParticle {
    base: Vec3,
    scale: f64,
}

impl GoldParticle {
    /// Position after the gentle vertical sway, keyed by x so neighbours drift
    /// out of phase
    fn position(&self, t: f64) -> Vec3 {
        Vec3::new(
            self.base.x,
            self.base.y + (t * 0.5 + self.base.x).sin() * 0.1,
            self.base.z,
        )
    }

    fn spin_degrees(&self, t: f64) -> f64 {
        (t * 0.1).to_degrees()
    }
}

const MAIN_PARTICLE: GoldParticle = GoldParticle { base: Vec3::new(0.0, 0.0, 0.0), scale: 1.2 };
const SATELLITES: [GoldParticle; 2] = [
    GoldParticle { base: Vec3::new(-3.0, 1.5, -2.0), scale: 0.4 },
    GoldParticle { base: Vec3::new(3.5, -1.5, -3.0), scale: 0.5 },
];

#[derive(Debug, Clone, Copy)]
struct SparkSeed {
    position: Vec3,
    phase: f64,
}

/// Hero background animation
#[derive(Debug, Clone)]
pub struct HeroScene {
    sparks: Vec<SparkSeed>,
}

impl Default for HeroScene {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroScene {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(SPARK_SEED);
        let half = SPARK_SPREAD / 2.0;
        let sparks = (0..SPARK_COUNT)
            .map(|_| SparkSeed {
                position: Vec3::new(
                    rng.random_range(-half..half),
                    rng.random_range(-half..half),
                    rng.random_range(-half..half),
                ),
                phase: rng.random_range(0.0..std::f64::consts::TAU),
            })
            .collect();
        Self { sparks }
    }

    pub fn frame(&self, t: f64, width: f64, height: f64) -> SceneFrame {
        let mut frame = SceneFrame::new(width, height);

        let particles = std::iter::once((MAIN_PARTICLE, MAIN_GROUP))
            .chain(SATELLITES.iter().map(|p| (*p, SATELLITE_GROUP)));
        for (particle, group) in particles {
            let world = group.apply(particle.position(t), t);
            if let Some(p) = CAMERA.project(world, width, height) {
                frame.shapes.push(Shape::Orb(Orb {
                    cx: p.x,
                    cy: p.y,
                    r: particle.scale * p.scale,
                    color: GOLD,
                    highlight_degrees: particle.spin_degrees(t),
                    depth: p.depth,
                }));
            }
        }

        // The ring lies nearly flat, tipping slowly and turning about y.
        let tilt = FRAC_PI_2 + (t * 0.2).sin() * 0.1;
        let normal = Vec3::Z
            .rotate_x(tilt)
            .rotate_y(t * 0.05)
            .rotate(MAIN_GROUP.wobble(t));
        let center = MAIN_GROUP.apply(Vec3::default(), t);
        if let Some(outline) = project_ring(&CAMERA, center, RING_RADIUS, normal, width, height) {
            let stroke_width = (RING_TUBE * 2.0 * outline.rx / RING_RADIUS).max(1.0);
            frame.shapes.push(Shape::Ring(Ring {
                outline,
                color: GOLD,
                stroke_width,
                glow: true,
            }));
        }

        for seed in &self.sparks {
            let phase = t * SPARK_SPEED + seed.phase;
            let drift = Vec3::new(phase.cos(), phase.sin(), 0.0) * 0.15;
            if let Some(p) = CAMERA.project(seed.position + drift, width, height) {
                let twinkle = 0.5 + 0.5 * (phase * 2.0).sin();
                frame.sparks.push(Spark {
                    cx: p.x,
                    cy: p.y,
                    r: SPARK_SIZE_PX / 2.0,
                    opacity: SPARK_OPACITY * twinkle,
                });
            }
        }

        frame.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkles_are_deterministic() {
        let a = HeroScene::new().frame(1.0, 800.0, 600.0);
        let b = HeroScene::new().frame(1.0, 800.0, 600.0);
        assert_eq!(a, b);
    }

    #[test]
    fn frame_has_three_orbs_and_a_ring() {
        let frame = HeroScene::new().frame(0.0, 1280.0, 800.0);
        let orbs = frame.shapes.iter().filter(|s| matches!(s, Shape::Orb(_))).count();
        let rings = frame.shapes.iter().filter(|s| matches!(s, Shape::Ring(_))).count();
        assert_eq!(orbs, 3);
        assert_eq!(rings, 1);
        assert!(frame.sparks.len() <= SPARK_COUNT);
        assert!(!frame.sparks.is_empty());
    }

    #[test]
    fn shapes_are_back_to_front() {
        let frame = HeroScene::new().frame(3.7, 1280.0, 800.0);
        let depths: Vec<f64> = frame.shapes.iter().map(Shape::depth).collect();
        assert!(depths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn main_particle_stays_near_centre() {
        for step in 0..200 {
            let t = step as f64 * 0.25;
            let frame = HeroScene::new().frame(t, 1000.0, 1000.0);
            let nearest = frame.shapes.last().unwrap();
            if let Shape::Orb(orb) = nearest {
                assert!((orb.cx - 500.0).abs() < 100.0);
                assert!((orb.cy - 500.0).abs() < 100.0);
            }
        }
    }

    #[test]
    fn values_are_finite_over_time() {
        let scene = HeroScene::new();
        for step in 0..100 {
            let frame = scene.frame(step as f64 * 1.3, 640.0, 480.0);
            for spark in &frame.sparks {
                assert!(spark.cx.is_finite() && spark.cy.is_finite());
                assert!((0.0..=SPARK_OPACITY).contains(&spark.opacity));
            }
        }
    }
}
