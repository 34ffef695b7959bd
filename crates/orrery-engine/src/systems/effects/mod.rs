//! Visual effects system: particle streams projected to point sprites.
//!
//! This module provides the `EffectsState` facade owning the wind
//! particles and their point buffer, plus the shared RNG games use for
//! procedural placement.

mod particle;
mod rng;

pub use particle::{random_unit, Particle};
pub use rng::Rng;

use crate::camera::Camera3D;
use crate::math::Vec3;
use crate::renderer::{PointBuffer, PointInstance};

/// Container for streaming particle effects (solar wind).
/// Generic — games seed the emitter and tick it each frame.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub rng: Rng,
    /// Emitter center in world space.
    pub origin: Vec3,
    /// Radius of the emitter sphere particles spawn on.
    pub spawn_radius: f32,
    /// Particles past this distance from the origin respawn.
    pub max_distance: f32,
    pub visible: bool,
    buffer: PointBuffer,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64, max_points: usize) -> Self {
        EffectsState {
            particles: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
            origin: Vec3::ZERO,
            spawn_radius: 10.0,
            max_distance: 200.0,
            visible: true,
            buffer: PointBuffer::with_capacity(max_points),
        }
    }

    /// Configure the emitter sphere and seed `count` particles on it.
    pub fn seed_particles(
        &mut self,
        count: usize,
        origin: Vec3,
        spawn_radius: f32,
        max_distance: f32,
        size: f32,
        color: [f32; 4],
    ) {
        self.origin = origin;
        self.spawn_radius = spawn_radius;
        self.max_distance = max_distance;
        self.particles.clear();
        for _ in 0..count {
            let mut p = Particle {
                pos: Vec3::ZERO,
                vel: Vec3::ZERO,
                size,
                color,
            };
            p.respawn(&mut self.rng, origin, spawn_radius);
            self.particles.push(p);
        }
    }

    /// Advance all particles; escaped ones respawn on the emitter sphere.
    pub fn tick(&mut self, speed: f32) {
        let origin = self.origin;
        let spawn_radius = self.spawn_radius;
        let max_distance = self.max_distance;
        for p in &mut self.particles {
            if !p.tick(speed, max_distance) {
                p.respawn(&mut self.rng, origin, spawn_radius);
            }
        }
    }

    /// Project particles to the point buffer, dropping those behind the
    /// camera. Truncates at `max` points.
    pub fn rebuild_buffer(&mut self, camera: &Camera3D, max: usize) {
        self.buffer.clear();
        if !self.visible {
            return;
        }
        for p in &self.particles {
            if self.buffer.point_count() >= max {
                break;
            }
            let proj = camera.project(p.pos);
            if proj.depth <= 0.1 {
                continue;
            }
            self.buffer.push(PointInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                size: p.size * proj.scale,
                r: p.color[0],
                g: p.color[1],
                b: p.color[2],
                a: p.color[3],
                depth: proj.depth,
            });
        }
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.buffer.clear();
    }

    pub fn point_count(&self) -> usize {
        self.buffer.point_count()
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.points_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_places_particles_on_emitter() {
        let mut effects = EffectsState::new(42, 1024);
        effects.seed_particles(100, Vec3::ZERO, 11.0, 200.0, 0.5, [1.0; 4]);
        assert_eq!(effects.particles.len(), 100);
        for p in &effects.particles {
            assert!((p.pos.length() - 11.0).abs() < 1e-3);
        }
    }

    #[test]
    fn escaped_particles_respawn() {
        let mut effects = EffectsState::new(42, 1024);
        effects.seed_particles(50, Vec3::ZERO, 11.0, 200.0, 0.5, [1.0; 4]);
        // Huge speed forces everything out and back onto the emitter.
        for _ in 0..100 {
            effects.tick(10_000.0);
        }
        for p in &effects.particles {
            assert!(p.pos.length() <= 200.0 + 11.0);
        }
    }

    #[test]
    fn rebuild_respects_max_and_visibility() {
        let mut effects = EffectsState::new(42, 1024);
        effects.seed_particles(100, Vec3::ZERO, 11.0, 200.0, 0.5, [1.0; 4]);
        let camera = Camera3D::default();
        effects.rebuild_buffer(&camera, 10);
        assert!(effects.point_count() <= 10);

        effects.visible = false;
        effects.rebuild_buffer(&camera, 10);
        assert_eq!(effects.point_count(), 0);
    }
}
