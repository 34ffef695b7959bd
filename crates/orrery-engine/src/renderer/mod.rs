pub mod label_instance;
pub mod point_instance;
pub mod sdf_instance;

pub use label_instance::{LabelBuffer, LabelInstance};
pub use point_instance::{PointBuffer, PointInstance};
pub use sdf_instance::{SDFBuffer, SDFInstance};
