pub mod api;
pub mod bridge;
pub mod camera;
pub mod components;
pub mod core;
pub mod input;
pub mod math;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent};
pub use bridge::protocol::ProtocolLayout;
pub use camera::{Camera3D, CameraFlight, Projection, Ray};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, SDFColor, SDFShape};
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, FpsCounter};
pub use input::queue::{InputEvent, InputQueue};
pub use math::{ease_vec3, lerp_vec3, Easing, Vec3};
pub use renderer::label_instance::{LabelBuffer, LabelInstance};
pub use renderer::point_instance::{PointBuffer, PointInstance};
pub use renderer::sdf_instance::{SDFBuffer, SDFInstance};
pub use systems::effects::{random_unit, EffectsState, Particle, Rng};
pub use systems::points::{PointBatch, PointBatchId, PointSprite, PointState};
pub use systems::render::{build_sdf_buffer, pick};

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorColor, VectorState, VectorVertex};
