pub mod effects;
pub mod points;
pub mod render;
#[cfg(feature = "vectors")]
pub mod vector;

pub use effects::EffectsState;
pub use points::{PointBatch, PointBatchId, PointSprite, PointState};
pub use render::{build_sdf_buffer, pick};
#[cfg(feature = "vectors")]
pub use vector::{VectorColor, VectorState, VectorVertex};
