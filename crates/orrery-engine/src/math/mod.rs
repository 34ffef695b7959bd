pub mod easing;
pub mod vec3;

pub use easing::{ease_vec3, lerp_vec3, Easing};
pub use vec3::Vec3;
