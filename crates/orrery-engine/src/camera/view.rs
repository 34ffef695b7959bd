//! Perspective look-at camera for 3D-to-2D projection.
//!
//! The camera is defined by a world position and a look-at target rather
//! than orbit angles, so that position and target can be interpolated
//! independently during camera flights.

use crate::math::Vec3;
use glam::Vec2;

/// Projection result from 3D to 2D.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// 2D screen position.
    pub pos: Vec2,
    /// Distance along the view direction (positive = in front of camera).
    pub depth: f32,
    /// Scale factor for depth-based sizing.
    pub scale: f32,
}

/// A picking ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Nearest positive intersection distance with a sphere, if any.
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_center = center - self.origin;
        let along = to_center.dot(self.dir);
        let closest_sq = to_center.length_squared() - along * along;
        let r_sq = radius * radius;
        if closest_sq > r_sq {
            return None;
        }
        let half = (r_sq - closest_sq).sqrt();
        let near = along - half;
        if near >= 0.0 {
            Some(near)
        } else {
            let far = along + half;
            (far >= 0.0).then_some(far)
        }
    }
}

/// Perspective camera with position + look-at target.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Screen dimensions for projection.
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Self::HOME_POSITION,
            target: Vec3::ZERO,
            screen_width: 1600.0,
            screen_height: 900.0,
        }
    }
}

impl Camera3D {
    /// Default viewpoint: above and behind the ecliptic plane.
    pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 80.0, 150.0);

    /// Vertical field of view in radians (75 degrees).
    const FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;
    /// Points closer than this along the view direction are not projected.
    const NEAR: f32 = 0.1;

    const ORBIT_SENSITIVITY: f32 = 0.008;
    const ZOOM_SPEED: f32 = 0.1;
    const MIN_DISTANCE: f32 = 5.0;
    const MAX_DISTANCE: f32 = 800.0;
    /// Keep elevation away from the poles to avoid a degenerate view basis.
    const MAX_ELEVATION: f32 = 1.45;

    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// Update screen dimensions (viewport resize).
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Return to the home viewpoint looking at the origin.
    pub fn reset(&mut self) {
        self.position = Self::HOME_POSITION;
        self.target = Vec3::ZERO;
    }

    /// Focal length in pixels derived from the vertical FOV.
    fn focal(&self) -> f32 {
        0.5 * self.screen_height / (Self::FOV * 0.5).tan()
    }

    /// Orthonormal view basis (right, up, forward).
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize();
        let mut right = forward.cross(Vec3::Y);
        if right.length_squared() < 1e-8 {
            // Looking straight up or down: fall back to world X.
            right = Vec3::X;
        }
        let right = right.normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Project a world position to screen coordinates.
    pub fn project(&self, pos: Vec3) -> Projection {
        let (right, up, forward) = self.basis();
        let rel = pos - self.position;
        let depth = rel.dot(forward);
        let safe_depth = depth.max(Self::NEAR);
        let scale = self.focal() / safe_depth;
        Projection {
            pos: Vec2::new(
                self.screen_width * 0.5 + rel.dot(right) * scale,
                self.screen_height * 0.5 - rel.dot(up) * scale,
            ),
            depth,
            scale,
        }
    }

    /// Build a world-space picking ray through a screen point.
    pub fn pick_ray(&self, screen: Vec2) -> Ray {
        let (right, up, forward) = self.basis();
        let focal = self.focal();
        let u = (screen.x - self.screen_width * 0.5) / focal;
        let v = -(screen.y - self.screen_height * 0.5) / focal;
        Ray {
            origin: self.position,
            dir: (forward + right * u + up * v).normalize(),
        }
    }

    /// Distance from camera to target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Orbit around the target by pointer delta (pixels).
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.rotate_about_target(
            -dx * Self::ORBIT_SENSITIVITY,
            dy * Self::ORBIT_SENSITIVITY,
        );
    }

    /// Zoom toward/away from the target (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        let dist = self.distance();
        let new_dist = (dist * (1.0 - delta * Self::ZOOM_SPEED))
            .clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
        let dir = (self.position - self.target).normalize();
        self.position = self.target + dir * new_dist;
    }

    /// Slow azimuthal drift around the target (auto-rotate mode).
    pub fn auto_rotate(&mut self, dt: f32, rate: f32) {
        self.rotate_about_target(rate * dt, 0.0);
    }

    fn rotate_about_target(&mut self, d_azimuth: f32, d_elevation: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius < 1e-6 {
            return;
        }
        let mut azimuth = offset.x.atan2(offset.z);
        let mut elevation = (offset.y / radius).clamp(-1.0, 1.0).asin();
        azimuth += d_azimuth;
        elevation = (elevation + d_elevation)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        let cos_e = elevation.cos();
        self.position = self.target
            + Vec3::new(
                radius * cos_e * azimuth.sin(),
                radius * elevation.sin(),
                radius * cos_e * azimuth.cos(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_target_to_screen_center() {
        let camera = Camera3D::new(800.0, 600.0);
        let proj = camera.project(Vec3::ZERO);
        assert!((proj.pos.x - 400.0).abs() < 0.5);
        assert!((proj.pos.y - 300.0).abs() < 0.5);
    }

    #[test]
    fn project_depth_scaling() {
        let mut camera = Camera3D::new(800.0, 600.0);
        camera.position = Vec3::new(0.0, 0.0, 150.0);
        camera.target = Vec3::ZERO;
        let near = camera.project(Vec3::new(0.0, 0.0, 50.0));
        let far = camera.project(Vec3::new(0.0, 0.0, -50.0));
        assert!(near.scale > far.scale);
        assert!(near.depth < far.depth);
    }

    #[test]
    fn pick_ray_through_center_hits_target() {
        let camera = Camera3D::new(800.0, 600.0);
        let ray = camera.pick_ray(Vec2::new(400.0, 300.0));
        let hit = ray.hit_sphere(Vec3::ZERO, 5.0);
        assert!(hit.is_some());
    }

    #[test]
    fn pick_ray_miss() {
        let camera = Camera3D::new(800.0, 600.0);
        let ray = camera.pick_ray(Vec2::new(0.0, 0.0));
        assert!(ray.hit_sphere(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn ray_inside_sphere_hits_forward() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::Z,
        };
        let t = ray.hit_sphere(Vec3::ZERO, 10.0).unwrap();
        assert!(t > 0.0 && t <= 10.0);
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut camera = Camera3D::default();
        for _ in 0..200 {
            camera.zoom(1.0);
        }
        assert!(camera.distance() >= Camera3D::MIN_DISTANCE - 1e-3);
        for _ in 0..200 {
            camera.zoom(-1.0);
        }
        assert!(camera.distance() <= Camera3D::MAX_DISTANCE + 1e-3);
    }

    #[test]
    fn orbit_preserves_distance() {
        let mut camera = Camera3D::default();
        let before = camera.distance();
        camera.orbit(120.0, -40.0);
        assert!((camera.distance() - before).abs() < 0.01);
    }

    #[test]
    fn auto_rotate_moves_position_not_target() {
        let mut camera = Camera3D::default();
        let target = camera.target;
        let before = camera.position;
        camera.auto_rotate(1.0, 0.05);
        assert!(camera.position.distance(before) > 1e-3);
        assert_eq!(camera.target, target);
    }
}
