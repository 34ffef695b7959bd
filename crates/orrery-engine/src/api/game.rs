use crate::api::types::{EntityId, GameEvent};
use crate::camera::{Camera3D, CameraFlight};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::{LabelBuffer, LabelInstance};
use crate::systems::effects::EffectsState;
use crate::systems::points::PointState;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of SDF sphere instances (default: 64).
    pub max_sdf_instances: usize,
    /// Maximum number of static point sprites (default: 8192).
    pub max_points: usize,
    /// Maximum number of effect particles (default: 1024).
    pub max_effect_points: usize,
    /// Maximum number of vector line vertices (default: 16384).
    pub max_vector_vertices: usize,
    /// Maximum number of text labels (default: 16).
    pub max_labels: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 1600.0,
            world_height: 900.0,
            max_sdf_instances: 64,
            max_points: 8192,
            max_effect_points: 1024,
            max_vector_vertices: 16384,
            max_labels: 16,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Step simulation, handle input, update camera.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub flight: CameraFlight,
    pub effects: EffectsState,
    pub points: PointState,
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    pub labels: LabelBuffer,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::new(config.world_width, config.world_height),
            flight: CameraFlight::default(),
            effects: EffectsState::new(42, config.max_effect_points),
            points: PointState::new(config.max_points),
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(),
            labels: LabelBuffer::with_capacity(config.max_labels),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Place a label anchor for this frame.
    pub fn push_label(&mut self, label: LabelInstance) {
        self.labels.push(label);
    }

    /// Clear per-frame transient data (events, labels, vector lines).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.labels.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events_and_labels() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent {
            kind: 1.0,
            ..Default::default()
        });
        ctx.push_label(LabelInstance {
            index: 0.0,
            x: 10.0,
            y: 10.0,
            visible: 1.0,
        });
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
        assert_eq!(ctx.labels.label_count(), 0);
    }
}
