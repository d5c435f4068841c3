//! Small 3D helpers for the decorative scenes.

use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Unit vector along +z, the normal of an unrotated ring
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    pub fn rotate_z(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    /// Apply an XYZ Euler rotation (x first)
    pub fn rotate(self, euler: Euler) -> Self {
        self.rotate_x(euler.x).rotate_y(euler.y).rotate_z(euler.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Euler angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A point after projection onto the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Screen pixels per world unit at this depth
    pub scale: f64,
    /// Distance in front of the camera
    pub depth: f64,
}

/// Pinhole camera on the +z axis looking toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub fov_degrees: f64,
}

const NEAR_PLANE: f64 = 0.1;

impl Camera {
    pub const fn new(z: f64, fov_degrees: f64) -> Self {
        Self { z, fov_degrees }
    }

    /// Focal length in pixels for a viewport of the given height
    pub fn focal_length(&self, height: f64) -> f64 {
        (height / 2.0) / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Project a world point into a `width` x `height` viewport.
    ///
    /// Points behind the near plane are culled.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.z - point.z;
        if depth <= NEAR_PLANE {
            return None;
        }
        let scale = self.focal_length(height) / depth;
        Some(Projected {
            x: width / 2.0 + point.x * scale,
            y: height / 2.0 - point.y * scale,
            scale,
            depth,
        })
    }
}

/// Idle bobbing applied to a group of objects.
///
/// `speed` scales time, `float_intensity` the vertical travel and
/// `rotation_intensity` the wobble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl FloatMotion {
    pub const fn new(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self { speed, rotation_intensity, float_intensity }
    }

    fn phase(&self, t: f64) -> f64 {
        t / 4.0 * self.speed
    }

    pub fn lift(&self, t: f64) -> f64 {
        self.phase(t).sin() / 10.0 * self.float_intensity
    }

    pub fn wobble(&self, t: f64) -> Euler {
        let phase = self.phase(t);
        Euler::new(
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        )
    }

    /// Transform a point belonging to the floating group
    pub fn apply(&self, point: Vec3, t: f64) -> Vec3 {
        point.rotate(self.wobble(t)) + Vec3::new(0.0, self.lift(t), 0.0)
    }
}

/// Screen-space outline of a thin ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingOutline {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse in degrees (SVG convention, clockwise)
    pub angle_degrees: f64,
    pub depth: f64,
}

/// Project a circle of `radius` centred at `center` lying in the plane with
/// unit `normal`.
pub fn project_ring(
    camera: &Camera,
    center: Vec3,
    radius: f64,
    normal: Vec3,
    width: f64,
    height: f64,
) -> Option<RingOutline> {
    let projected = camera.project(center, width, height)?;
    // The major axis is perpendicular to the normal's screen projection.
    let angle = normal.y.atan2(normal.x).to_degrees() + 90.0;
    let rx = radius * projected.scale;
    let ry = rx * normal.z.abs();
    Some(RingOutline {
        cx: projected.x,
        cy: projected.y,
        rx,
        ry,
        angle_degrees: -angle,
        depth: projected.depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rotations_preserve_length() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = v.rotate(Euler::new(0.3, 1.1, -0.7));
        let len = |v: Vec3| (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert!(close(len(v), len(r)));
    }

    #[test]
    fn quarter_turn_about_x() {
        let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
        assert!(close(v.y, 0.0));
        assert!(close(v.z, 1.0));
    }

    #[test]
    fn origin_projects_to_centre() {
        let camera = Camera::new(6.0, 45.0);
        let p = camera.project(Vec3::default(), 800.0, 600.0).unwrap();
        assert!(close(p.x, 400.0));
        assert!(close(p.y, 300.0));
        assert!(close(p.depth, 6.0));
    }

    #[test]
    fn up_is_up_on_screen() {
        let camera = Camera::new(6.0, 45.0);
        let p = camera.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(p.y < 300.0);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = Camera::new(5.0, 50.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0), 100.0, 100.0).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, 9.0), 100.0, 100.0).is_none());
    }

    #[test]
    fn farther_points_are_smaller() {
        let camera = Camera::new(6.0, 45.0);
        let near = camera.project(Vec3::new(0.0, 0.0, 0.0), 800.0, 600.0).unwrap();
        let far = camera.project(Vec3::new(0.0, 0.0, -3.0), 800.0, 600.0).unwrap();
        assert!(far.scale < near.scale);
    }

    #[test]
    fn face_on_ring_is_circle_and_edge_on_ring_is_flat() {
        let camera = Camera::new(6.0, 45.0);
        let face_on = project_ring(&camera, Vec3::default(), 2.0, Vec3::Z, 800.0, 600.0).unwrap();
        assert!(close(face_on.rx, face_on.ry));

        let normal = Vec3::Z.rotate_x(FRAC_PI_2);
        let edge_on = project_ring(&camera, Vec3::default(), 2.0, normal, 800.0, 600.0).unwrap();
        assert!(edge_on.ry < 1e-6);
        assert!(edge_on.rx > 0.0);
    }

    #[test]
    fn float_motion_is_bounded() {
        let motion = FloatMotion::new(1.5, 0.2, 0.5);
        for step in 0..500 {
            let t = step as f64 * 0.1;
            assert!(motion.lift(t).abs() <= 0.05 + 1e-12);
            let w = motion.wobble(t);
            assert!(w.x.abs() <= 0.025 + 1e-12);
        }
    }
}
