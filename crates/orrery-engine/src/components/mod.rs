pub mod entity;
pub mod mesh;

pub use entity::Entity;
pub use mesh::{MeshComponent, SDFColor, SDFShape};
