use orrery_engine::systems::render::build_sdf_buffer;
use orrery_engine::{
    EngineContext, FixedTimestep, FpsCounter, Game, GameConfig, InputEvent,
    InputQueue, ProtocolLayout, SDFBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    sdf_buffer: SDFBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    fps: FpsCounter,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let sdf_buffer = SDFBuffer::with_capacity(config.max_sdf_instances);
        let ctx = EngineContext::with_config(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            sdf_buffer,
            timestep,
            layout,
            config,
            fps: FpsCounter::new(),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, project buffers through the camera.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain only once a step has consumed the queue; on zero-step
        // frames (display refresh faster than fixed_dt) events stay
        // queued for the next step instead of being dropped.
        if steps > 0 {
            self.input.drain();
        }

        // Project entities and point batches through the current camera
        build_sdf_buffer(
            self.ctx.scene.iter(),
            &self.ctx.camera,
            &mut self.sdf_buffer,
            self.config.max_sdf_instances,
        );
        self.ctx
            .points
            .rebuild(&self.ctx.camera, self.config.max_points);
        self.ctx
            .effects
            .rebuild_buffer(&self.ctx.camera, self.config.max_effect_points);

        self.fps.frame(dt);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.sdf_buffer.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.sdf_buffer.instance_count() as u32
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.ctx.points.buffer_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.ctx.points.point_count() as u32
    }

    pub fn effect_points_ptr(&self) -> *const f32 {
        self.ctx.effects.buffer_ptr()
    }

    pub fn effect_point_count(&self) -> u32 {
        self.ctx.effects.point_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    pub fn labels_ptr(&self) -> *const f32 {
        self.ctx.labels.labels_ptr()
    }

    pub fn label_count(&self) -> u32 {
        self.ctx.labels.label_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_sdf_instances(&self) -> u32 {
        self.layout.max_sdf_instances as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn max_effect_points(&self) -> u32 {
        self.layout.max_effect_points as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.layout.max_labels as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts the custom input events its update actually observes.
    struct CountingGame {
        seen: Rc<Cell<usize>>,
    }

    impl Game for CountingGame {
        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, _ctx: &mut EngineContext, input: &InputQueue) {
            let customs = input
                .iter()
                .filter(|e| matches!(e, InputEvent::Custom { .. }))
                .count();
            self.seen.set(self.seen.get() + customs);
        }
    }

    #[test]
    fn input_survives_zero_step_frames() {
        // At 120 Hz every other frame accumulates zero fixed steps; an
        // event pushed on such a frame must still reach the next step.
        let seen = Rc::new(Cell::new(0));
        let mut runner = GameRunner::new(CountingGame { seen: Rc::clone(&seen) });
        runner.init();

        let frame_dt = 1.0 / 120.0;
        let frames = 120;
        for _ in 0..frames {
            runner.push_input(InputEvent::Custom {
                kind: 3,
                a: 0.0,
                b: 0.0,
                c: 0.0,
            });
            runner.tick(frame_dt);
        }
        assert_eq!(seen.get(), frames, "every queued event must be observed");
    }

    #[test]
    fn queue_is_drained_after_a_step() {
        let seen = Rc::new(Cell::new(0));
        let mut runner = GameRunner::new(CountingGame { seen: Rc::clone(&seen) });
        runner.init();

        runner.push_input(InputEvent::Custom {
            kind: 1,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        // One full fixed step consumes and drains the queue.
        runner.tick(1.0 / 60.0);
        // Further steps with no new input see nothing.
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);
        assert_eq!(seen.get(), 1);
    }
}
