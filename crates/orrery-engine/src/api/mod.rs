pub mod game;
pub mod types;

pub use game::{EngineContext, Game, GameConfig};
pub use types::{EntityId, GameEvent};
