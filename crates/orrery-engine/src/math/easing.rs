// math/easing.rs
//
// Easing functions and interpolation helpers for camera animation.
// No dependencies on Entity/Scene — just math.

use super::vec3::Vec3;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow end.
    QuadOut,
    /// Stronger slow end — the camera-flight default.
    CubicOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate Vec3 with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn cubic_out_midpoint() {
        // 1 - (1 - 0.5)^3 = 0.875
        let mid = Easing::CubicOut.apply(0.5);
        assert!((mid - 0.875).abs() < 1e-6, "CubicOut at 0.5 = {mid}");
    }

    #[test]
    fn cubic_out_monotonic() {
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = Easing::CubicOut.apply(i as f32 / 20.0);
            assert!(v >= prev, "eased progress must not decrease");
            prev = v;
        }
    }

    #[test]
    fn ease_vec3_interpolates() {
        let a = Vec3::ZERO;
        let b = Vec3::new(100.0, 0.0, 0.0);
        let mid = ease_vec3(a, b, 0.5, Easing::Linear);
        assert!((mid.x - 50.0).abs() < 1e-4);
    }
}
