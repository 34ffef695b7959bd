pub mod scene;
pub mod time;

pub use scene::Scene;
pub use time::{FixedTimestep, FpsCounter};
