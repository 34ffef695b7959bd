//! Timed camera transitions.
//!
//! A flight interpolates both the camera position and its look-at target
//! over a fixed duration. Starting a new flight while one is running
//! replaces it — the last request wins.

use super::view::Camera3D;
use crate::math::{ease_vec3, Easing, Vec3};

/// Default flight duration in seconds.
pub const FLIGHT_DURATION: f32 = 2.0;

/// An in-progress camera transition.
#[derive(Debug, Clone, Default)]
pub struct CameraFlight {
    start_pos: Vec3,
    start_target: Vec3,
    end_pos: Vec3,
    end_target: Vec3,
    elapsed: f32,
    duration: f32,
    active: bool,
}

impl CameraFlight {
    /// Begin a flight from the camera's current pose to the given one.
    pub fn start(&mut self, camera: &Camera3D, end_pos: Vec3, end_target: Vec3) {
        self.start_pos = camera.position;
        self.start_target = camera.target;
        self.end_pos = end_pos;
        self.end_target = end_target;
        self.elapsed = 0.0;
        self.duration = FLIGHT_DURATION;
        self.active = true;
    }

    /// Abort without moving the camera.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the flight and write the interpolated pose into the camera.
    pub fn tick(&mut self, dt: f32, camera: &mut Camera3D) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        let t = (self.elapsed / self.duration).min(1.0);
        camera.position = ease_vec3(self.start_pos, self.end_pos, t, Easing::CubicOut);
        camera.target = ease_vec3(self.start_target, self.end_target, t, Easing::CubicOut);
        if t >= 1.0 {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_reaches_destination() {
        let mut camera = Camera3D::default();
        let mut flight = CameraFlight::default();
        let end_pos = Vec3::new(50.0, 10.0, 50.0);
        let end_target = Vec3::new(30.0, 0.0, 0.0);
        flight.start(&camera, end_pos, end_target);
        for _ in 0..150 {
            flight.tick(1.0 / 60.0, &mut camera);
        }
        assert!(!flight.is_active());
        assert!(camera.position.distance(end_pos) < 1e-3);
        assert!(camera.target.distance(end_target) < 1e-3);
    }

    #[test]
    fn flight_decelerates() {
        let mut camera = Camera3D::default();
        let mut flight = CameraFlight::default();
        let start = camera.position;
        flight.start(&camera, Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO);
        flight.tick(0.5, &mut camera);
        let first_quarter = camera.position.distance(start);
        let mid = camera.position;
        flight.tick(1.0, &mut camera);
        let last_leg = camera.position.distance(mid);
        // Cubic ease-out covers most of the distance early.
        assert!(first_quarter > last_leg);
    }

    #[test]
    fn restart_overrides_previous_flight() {
        let mut camera = Camera3D::default();
        let mut flight = CameraFlight::default();
        flight.start(&camera, Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO);
        flight.tick(0.5, &mut camera);
        let end = Vec3::new(-40.0, 20.0, 0.0);
        flight.start(&camera, end, Vec3::ZERO);
        for _ in 0..150 {
            flight.tick(1.0 / 60.0, &mut camera);
        }
        assert!(camera.position.distance(end) < 1e-3);
    }

    #[test]
    fn inactive_flight_leaves_camera_alone() {
        let mut camera = Camera3D::default();
        let before = camera.position;
        let mut flight = CameraFlight::default();
        flight.tick(1.0, &mut camera);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn cancel_stops_motion() {
        let mut camera = Camera3D::default();
        let mut flight = CameraFlight::default();
        flight.start(&camera, Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO);
        flight.tick(0.2, &mut camera);
        flight.cancel();
        let frozen = camera.position;
        flight.tick(1.0, &mut camera);
        assert_eq!(camera.position, frozen);
    }
}
