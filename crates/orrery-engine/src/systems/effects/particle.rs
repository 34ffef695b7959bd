//! Streaming particles for the solar wind effect.

use super::rng::Rng;
use crate::math::Vec3;

/// A single wind particle drifting outward from the emitter.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub size: f32,
    pub color: [f32; 4],
}

impl Particle {
    /// Advance position by velocity scaled with the global speed factor.
    /// Returns false when the particle has drifted past `max_distance`
    /// from the origin and should respawn.
    pub fn tick(&mut self, speed: f32, max_distance: f32) -> bool {
        self.pos += self.vel * speed;
        self.pos.length_squared() <= max_distance * max_distance
    }

    /// Place the particle on a random point of the emitter sphere with a
    /// small random drift velocity.
    pub fn respawn(&mut self, rng: &mut Rng, origin: Vec3, spawn_radius: f32) {
        let dir = random_unit(rng);
        self.pos = origin + dir * spawn_radius;
        self.vel = Vec3::new(
            (rng.next_f32() - 0.5) * 0.1,
            (rng.next_f32() - 0.5) * 0.1,
            (rng.next_f32() - 0.5) * 0.1,
        );
    }
}

/// Uniformly distributed direction on the unit sphere.
pub fn random_unit(rng: &mut Rng) -> Vec3 {
    // Rejection sampling in the unit cube.
    loop {
        let v = Vec3::new(
            rng.next_f32() * 2.0 - 1.0,
            rng.next_f32() * 2.0 - 1.0,
            rng.next_f32() * 2.0 - 1.0,
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            return v * (1.0 / len_sq.sqrt());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_escapes_past_max_distance() {
        let mut p = Particle {
            pos: Vec3::new(199.0, 0.0, 0.0),
            vel: Vec3::new(2.0, 0.0, 0.0),
            size: 0.5,
            color: [1.0; 4],
        };
        assert!(!p.tick(1.0, 200.0));
    }

    #[test]
    fn particle_moves_by_velocity_times_speed() {
        let mut p = Particle {
            pos: Vec3::ZERO,
            vel: Vec3::new(0.1, 0.0, 0.0),
            size: 0.5,
            color: [1.0; 4],
        };
        p.tick(10.0, 200.0);
        assert!((p.pos.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn respawn_lands_on_emitter_sphere() {
        let mut rng = Rng::new(5);
        let mut p = Particle {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            size: 0.5,
            color: [1.0; 4],
        };
        p.respawn(&mut rng, Vec3::ZERO, 11.0);
        assert!((p.pos.length() - 11.0).abs() < 1e-3);
    }

    #[test]
    fn random_unit_has_unit_length() {
        let mut rng = Rng::new(9);
        for _ in 0..50 {
            let v = random_unit(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-4);
        }
    }
}
