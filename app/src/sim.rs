/// Orbital and rotational integrator — pure math, no engine dependencies.
///
/// Angles are f64 accumulators and are never wrapped to [0, 2π); only
/// their trigonometric images are observed, so unbounded growth is fine
/// at double precision for any realistic session.

use crate::bodies::{BodyId, BodyDescriptor, BODY_COUNT, DESCRIPTORS};
use orrery_engine::Vec3;

/// Shared orbital eccentricity. The source model applies Earth's value to
/// every planet — a known approximation, kept for visual parity.
pub const ECCENTRICITY: f64 = 0.0167;

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Global time controls. Mutated by UI events, read each step.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    speed: f64,
    direction: f64,
    pub paused: bool,
}

impl SimulationClock {
    pub const MIN_SPEED: f64 = 0.0;
    pub const MAX_SPEED: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            speed: 1.0,
            direction: 1.0,
            paused: false,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED);
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Set time direction: any negative value means backward.
    pub fn set_direction(&mut self, direction: f64) {
        self.direction = if direction < 0.0 { -1.0 } else { 1.0 };
    }

    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }

    /// Back to defaults: normal speed, forward, running.
    pub fn reset(&mut self) {
        self.speed = 1.0;
        self.direction = 1.0;
        self.paused = false;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable per-body simulation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyState {
    /// Accumulated orbital angle in radians.
    pub orbit_angle: f64,
    /// Accumulated spin angle in radians.
    pub rotation_angle: f64,
    /// World position derived from the orbit angle.
    pub position: Vec3,
}

/// Live state for every body, indexed like `BodyId::ALL`.
#[derive(Debug, Clone)]
pub struct SystemState {
    pub bodies: [BodyState; BODY_COUNT],
}

impl SystemState {
    pub fn new() -> Self {
        Self {
            bodies: [BodyState::default(); BODY_COUNT],
        }
    }

    pub fn body(&self, id: BodyId) -> &BodyState {
        &self.bodies[id.index()]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut BodyState {
        &mut self.bodies[id.index()]
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

/// Position on the fixed-eccentricity ellipse with inclination tilt.
pub fn orbital_position(desc: &BodyDescriptor, orbit_angle: f64) -> Vec3 {
    let a = desc.distance as f64;
    let e = ECCENTRICITY;
    let r = a * (1.0 - e * e) / (1.0 + e * orbit_angle.cos());
    let x = r * orbit_angle.cos();
    let z_flat = r * orbit_angle.sin();
    let incl = desc.inclination as f64 * DEG_TO_RAD;
    Vec3::new(
        x as f32,
        (z_flat * incl.sin()) as f32,
        (z_flat * incl.cos()) as f32,
    )
}

/// Advance every orbiting body by `dt` seconds of wall-clock time.
///
/// The sun (index 0) is skipped — its constant-rate spin is a visual
/// effect, not simulation state. A paused clock skips the whole update
/// and the frame renders with stale state.
pub fn advance(state: &mut SystemState, clock: &SimulationClock, dt: f64) {
    if clock.paused {
        return;
    }
    let scaled = dt * clock.speed() * clock.direction();
    for (i, desc) in DESCRIPTORS.iter().enumerate().skip(1) {
        let body = &mut state.bodies[i];

        body.orbit_angle += std::f64::consts::TAU / desc.orbital_period * scaled;
        body.position = orbital_position(desc, body.orbit_angle);

        // Negative rotation period marks retrograde: spin opposite the
        // common direction at the same rate.
        let rot = desc.rotation_period;
        let spin = std::f64::consts::TAU / rot.abs() * scaled;
        if rot >= 0.0 {
            body.rotation_angle += spin;
        } else {
            body.rotation_angle -= spin;
        }
    }
}
