/// Solar System — interactive 3D orrery with a guided tour.
///
/// Pure SDF spheres + point sprites + vector lines — no sprites, no
/// physics. Camera system: drag-to-orbit, scroll-to-zoom, eased flights
/// to picked or toured bodies.

use glam::Vec2;
use orrery_engine::api::game::GameConfig;
use orrery_engine::components::mesh::{MeshComponent, SDFColor, SDFShape};
use orrery_engine::input::queue::{InputEvent, InputQueue};
use orrery_engine::systems::render::pick;
use orrery_engine::*;

use crate::backdrop;
use crate::bodies::{self, BodyId, MaterialKind, BODY_COUNT};
use crate::sim::{self, SimulationClock, SystemState};
use crate::tour::TourSequencer;

// ── World layout ─────────────────────────────────────────────────────

const WORLD_W: f32 = 1600.0;
const WORLD_H: f32 = 900.0;

/// Number of sample points for orbit path drawing.
const ORBIT_SAMPLES: usize = 96;
const ORBIT_LINE_WIDTH: f32 = 1.0;
const ORBIT_COLOR: VectorColor = VectorColor::new(0.31, 0.765, 0.969, 0.3);

// ── Custom event kinds from React ────────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_SET_DIRECTION: u32 = 2;
const CUSTOM_TOGGLE_PAUSE: u32 = 3;
const CUSTOM_TOGGLE_ORBITS: u32 = 4;
const CUSTOM_TOGGLE_LABELS: u32 = 5;
const CUSTOM_TOGGLE_ATMOSPHERE: u32 = 6;
const CUSTOM_TOGGLE_ASTEROIDS: u32 = 7;
const CUSTOM_TOGGLE_AUTO_ROTATE: u32 = 8;
const CUSTOM_TOGGLE_FOLLOW: u32 = 9;
const CUSTOM_TOGGLE_TOUR: u32 = 10;
const CUSTOM_RESET_VIEW: u32 = 11;
const CUSTOM_RESET_TIME: u32 = 12;
const CUSTOM_CENTURY_VIEW: u32 = 13;
const CUSTOM_SELECT: u32 = 14;
const CUSTOM_TOGGLE_FULLSCREEN: u32 = 15;
/// Zoom from UI buttons; wheel input covers the same path.
const CUSTOM_ZOOM: u32 = 16;
/// Viewport resize (sent by worker as kind=99).
const CUSTOM_RESIZE: u32 = 99;

// ── Game event kinds to React ────────────────────────────────────────

const EVENT_TIME_INFO: f32 = 1.0;
const EVENT_SELECTION: f32 = 2.0;
const EVENT_TOUR: f32 = 3.0;
/// Request the host toggle fullscreen; rejection is the host's problem.
const EVENT_FULLSCREEN: f32 = 4.0;

// ── Keyboard shortcuts ───────────────────────────────────────────────

const KEY_SPACE: u32 = 32;
const KEY_LEFT: u32 = 37;
const KEY_RIGHT: u32 = 39;
const KEY_F: u32 = 70;
const KEY_R: u32 = 82;

// ── Camera ───────────────────────────────────────────────────────────

/// Where the tour parks the camera relative to each stop.
const TOUR_OFFSET: Vec3 = Vec3::new(20.0, 10.0, 20.0);
/// Where a click-to-focus flight parks the camera.
const FOCUS_OFFSET: Vec3 = Vec3::new(15.0, 8.0, 15.0);
/// Auto-rotate drift in radians per second.
const AUTO_ROTATE_RATE: f32 = 0.05;
/// Screen-pixel drag distance before a click becomes a drag.
const DRAG_THRESHOLD: f32 = 5.0;

// ── Sun shells ───────────────────────────────────────────────────────

const GLOW_SCALE: f32 = 1.3;
const GLOW_ALPHA: f32 = 0.2;
const CORONA_SCALE: f32 = 1.6;
const CORONA_ALPHA: f32 = 0.05;
const CORONA_COLOR: (f32, f32, f32) = (1.0, 1.0, 0.533);

// ── Atmosphere shells ────────────────────────────────────────────────

const ATMOSPHERE_SCALE: f32 = 1.1;
const ATMOSPHERE_ALPHA: f32 = 0.1;

// ── Solar wind ───────────────────────────────────────────────────────

const WIND_COUNT: usize = 1000;
const WIND_SPAWN_SCALE: f32 = 1.1;
const WIND_MAX_DISTANCE: f32 = 200.0;
const WIND_SIZE: f32 = 0.5;
const WIND_COLOR: [f32; 4] = [1.0, 0.8, 0.3, 0.6];

// ── Saturn rings ─────────────────────────────────────────────────────

const RING_SCALES: [f32; 3] = [1.5, 1.9, 2.4];
const RING_SAMPLES: usize = 64;
const RING_COLOR: VectorColor = VectorColor::new(0.8, 0.7, 0.5, 0.6);
const RING_WIDTH: f32 = 1.5;

// ── Selection ────────────────────────────────────────────────────────

const SELECT_RING_COLOR: VectorColor = VectorColor::new(1.0, 1.0, 1.0, 0.6);
const SELECT_RING_WIDTH: f32 = 1.5;

/// Per-material surface response: (shininess, emissive).
fn material_surface(kind: MaterialKind) -> (f32, f32) {
    match kind {
        MaterialKind::Star => (100.0, 2.5),
        MaterialKind::Rocky => (50.0, 0.0),
        MaterialKind::GasGiant => (30.0, 0.0),
    }
}

fn mesh_for(desc: &bodies::BodyDescriptor) -> MeshComponent {
    let (shininess, emissive) = material_surface(desc.material);
    MeshComponent::new(
        SDFShape::Sphere {
            radius: desc.visual_radius(),
        },
        SDFColor::new(desc.color.0, desc.color.1, desc.color.2),
    )
    .with_shininess(shininess)
    .with_emissive(emissive)
}

// ── Game struct ──────────────────────────────────────────────────────

pub struct SolarSystem {
    clock: SimulationClock,
    state: SystemState,
    tour: TourSequencer,
    selected: Option<BodyId>,

    // Visibility toggles
    show_orbits: bool,
    show_labels: bool,
    show_atmosphere: bool,
    show_asteroids: bool,
    auto_rotate: bool,
    follow_earth: bool,

    // Entity handles
    body_ids: [Option<EntityId>; BODY_COUNT],
    /// Translucent shells: (body index, shell entity).
    atmosphere_ids: Vec<(usize, EntityId)>,
    /// Sun glow and corona shells, innermost first.
    sun_shell_ids: Vec<EntityId>,
    belt_id: Option<PointBatchId>,

    // Drag state
    dragging: bool,
    drag_moved: bool,
    drag_start: (f32, f32),
    last_pointer: (f32, f32),
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            clock: SimulationClock::new(),
            state: SystemState::new(),
            tour: TourSequencer::new(),
            selected: None,

            show_orbits: true,
            show_labels: true,
            show_atmosphere: true,
            show_asteroids: true,
            auto_rotate: false,
            follow_earth: false,

            body_ids: [None; BODY_COUNT],
            atmosphere_ids: Vec::new(),
            sun_shell_ids: Vec::new(),
            belt_id: None,

            dragging: false,
            drag_moved: false,
            drag_start: (0.0, 0.0),
            last_pointer: (0.0, 0.0),
        }
    }

    /// Map a picked entity back to its body: shells select their owner.
    fn body_for_entity(&self, id: EntityId) -> Option<BodyId> {
        if self.sun_shell_ids.contains(&id) {
            return Some(BodyId::Sun);
        }
        for (body_idx, shell_id) in &self.atmosphere_ids {
            if *shell_id == id {
                return BodyId::from_index(*body_idx);
            }
        }
        self.body_ids
            .iter()
            .position(|b| *b == Some(id))
            .and_then(BodyId::from_index)
    }

    /// World position of a body right now.
    fn body_pos(&self, id: BodyId) -> Vec3 {
        self.state.body(id).position
    }

    /// Fly the camera to look at a body from the given offset.
    fn fly_to(&mut self, ctx: &mut EngineContext, id: BodyId, offset: Vec3) {
        let target = self.body_pos(id);
        ctx.flight.start(&ctx.camera, target + offset, target);
    }

    fn select(&mut self, ctx: &mut EngineContext, id: BodyId) {
        log::debug!("selected {}", id.name());
        self.selected = Some(id);
        self.fly_to(ctx, id, FOCUS_OFFSET);
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => self.clock.set_speed(a as f64),
            CUSTOM_SET_DIRECTION => self.clock.set_direction(a as f64),
            CUSTOM_TOGGLE_PAUSE => self.clock.paused = !self.clock.paused,
            CUSTOM_TOGGLE_ORBITS => self.show_orbits = !self.show_orbits,
            CUSTOM_TOGGLE_LABELS => self.show_labels = !self.show_labels,
            CUSTOM_TOGGLE_ATMOSPHERE => {
                self.show_atmosphere = !self.show_atmosphere;
                let visible = self.show_atmosphere;
                for (_, id) in &self.atmosphere_ids {
                    if let Some(e) = ctx.scene.get_mut(*id) {
                        e.active = visible;
                    }
                }
            }
            CUSTOM_TOGGLE_ASTEROIDS => {
                self.show_asteroids = !self.show_asteroids;
                if let Some(id) = self.belt_id {
                    ctx.points.batch_mut(id).visible = self.show_asteroids;
                }
            }
            CUSTOM_TOGGLE_AUTO_ROTATE => self.auto_rotate = !self.auto_rotate,
            CUSTOM_TOGGLE_FOLLOW => self.follow_earth = !self.follow_earth,
            CUSTOM_TOGGLE_TOUR => {
                if self.tour.is_active() {
                    self.tour.deactivate();
                } else {
                    self.tour.activate();
                }
                log::info!("tour {}", if self.tour.is_active() { "started" } else { "stopped" });
            }
            CUSTOM_RESET_VIEW => {
                ctx.flight.cancel();
                ctx.camera.reset();
                self.follow_earth = false;
                self.selected = None;
            }
            CUSTOM_RESET_TIME => self.clock.reset(),
            CUSTOM_CENTURY_VIEW => {
                // Decades fly by: crank the clock and pull the camera out.
                self.clock.set_speed(50.0);
                self.clock.paused = false;
                ctx.flight.cancel();
                ctx.camera.reset();
            }
            CUSTOM_SELECT => {
                if let Some(id) = BodyId::from_index(a as usize) {
                    self.select(ctx, id);
                }
                // Out-of-range index is a silent no-op.
            }
            CUSTOM_TOGGLE_FULLSCREEN => {
                ctx.emit_event(GameEvent {
                    kind: EVENT_FULLSCREEN,
                    ..Default::default()
                });
            }
            CUSTOM_ZOOM => ctx.camera.zoom(a),
            CUSTOM_RESIZE => ctx.camera.set_screen_size(a, b),
            _ => {}
        }
    }

    fn handle_key(&mut self, ctx: &mut EngineContext, key_code: u32) {
        match key_code {
            KEY_SPACE => self.clock.paused = !self.clock.paused,
            KEY_R => {
                self.handle_custom(ctx, CUSTOM_RESET_VIEW, 0.0, 0.0);
                self.clock.reset();
            }
            KEY_F => self.handle_custom(ctx, CUSTOM_TOGGLE_FULLSCREEN, 0.0, 0.0),
            KEY_LEFT => self.clock.set_direction(-1.0),
            KEY_RIGHT => self.clock.set_direction(1.0),
            _ => {}
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, b, .. } => self.handle_custom(ctx, kind, a, b),
                InputEvent::KeyDown { key_code } => self.handle_key(ctx, key_code),
                InputEvent::Wheel { delta } => ctx.camera.zoom(delta),
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.drag_moved = false;
                    self.drag_start = (x, y);
                    self.last_pointer = (x, y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let from_start = Vec2::new(x - self.drag_start.0, y - self.drag_start.1);
                        if from_start.length() > DRAG_THRESHOLD {
                            self.drag_moved = true;
                        }
                        if self.drag_moved {
                            // Dragging takes manual control of the camera.
                            ctx.flight.cancel();
                            let dx = x - self.last_pointer.0;
                            let dy = y - self.last_pointer.1;
                            ctx.camera.orbit(dx, dy);
                        }
                        self.last_pointer = (x, y);
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    if self.dragging && !self.drag_moved {
                        // Click (not a drag) → pick a body.
                        let hit = pick(ctx.scene.iter(), &ctx.camera, Vec2::new(x, y));
                        if let Some(body) = hit.and_then(|e| self.body_for_entity(e)) {
                            self.select(ctx, body);
                        }
                    }
                    self.dragging = false;
                    self.drag_moved = false;
                }
                _ => {}
            }
        }
    }

    // ── Entity sync ────────────────────────────────────────────────

    /// Write integrator output into scene entities.
    fn sync_bodies(&self, ctx: &mut EngineContext) {
        for (i, id) in self.body_ids.iter().enumerate().skip(1) {
            let body = &self.state.bodies[i];
            if let Some(id) = *id {
                if let Some(entity) = ctx.scene.get_mut(id) {
                    entity.pos = body.position;
                    entity.rotation = body.rotation_angle as f32;
                }
            }
        }
        for (body_idx, shell_id) in &self.atmosphere_ids {
            let pos = self.state.bodies[*body_idx].position;
            if let Some(entity) = ctx.scene.get_mut(*shell_id) {
                entity.pos = pos;
            }
        }
    }

    /// Decorative motion that is not simulation state: the sun's spin,
    /// shell shimmer, belt revolution, and the solar wind. These keep
    /// running while paused, scaled by the speed slider.
    fn tick_effects(&mut self, ctx: &mut EngineContext) {
        let speed = self.clock.speed() as f32;

        if let Some(sun_id) = self.body_ids[0] {
            if let Some(sun) = ctx.scene.get_mut(sun_id) {
                sun.rotation += 0.001 * speed;
            }
        }
        for (i, id) in self.sun_shell_ids.iter().enumerate() {
            if let Some(shell) = ctx.scene.get_mut(*id) {
                shell.rotation += 0.001 * (i as f32 + 2.0) * speed;
            }
        }
        if let Some(belt) = self.belt_id {
            ctx.points.batch_mut(belt).yaw += 0.0001 * speed;
        }
        ctx.effects.tick(speed);
    }

    // ── Drawing ────────────────────────────────────────────────────

    /// Project a world-space loop and stroke whatever part is in view.
    fn stroke_world_loop(
        ctx: &mut EngineContext,
        points: impl Iterator<Item = Vec3>,
        width: f32,
        color: VectorColor,
    ) {
        let mut projected = Vec::new();
        let mut all_visible = true;
        for p in points {
            let proj = ctx.camera.project(p);
            if proj.depth > 0.1 {
                projected.push(proj.pos);
            } else {
                all_visible = false;
            }
        }
        if all_visible && projected.len() >= 3 {
            ctx.vectors.stroke_polygon(&projected, width, color);
        } else if projected.len() >= 2 {
            ctx.vectors.stroke_polyline(&projected, width, color);
        }
    }

    fn draw_orbits(&self, ctx: &mut EngineContext) {
        for desc in bodies::DESCRIPTORS.iter().skip(1) {
            let samples = (0..ORBIT_SAMPLES).map(|i| {
                let angle = i as f64 / ORBIT_SAMPLES as f64 * std::f64::consts::TAU;
                sim::orbital_position(desc, angle)
            });
            Self::stroke_world_loop(ctx, samples, ORBIT_LINE_WIDTH, ORBIT_COLOR);
        }
    }

    /// Circle of world-space samples tilted into the body's orbital plane.
    fn ring_circle(center: Vec3, radius: f32, inclination_deg: f32) -> Vec<Vec3> {
        let incl = inclination_deg.to_radians();
        (0..RING_SAMPLES)
            .map(|j| {
                let angle = j as f32 / RING_SAMPLES as f32 * std::f32::consts::TAU;
                let x = radius * angle.cos();
                let z_flat = radius * angle.sin();
                center + Vec3::new(x, z_flat * incl.sin(), z_flat * incl.cos())
            })
            .collect()
    }

    /// Saturn's rings: concentric circles in the planet's orbital plane.
    fn draw_rings(&self, ctx: &mut EngineContext) {
        for (i, desc) in bodies::DESCRIPTORS.iter().enumerate() {
            if !desc.has_rings {
                continue;
            }
            let center = self.state.bodies[i].position;
            for scale in RING_SCALES {
                let radius = desc.visual_radius() * scale;
                let samples = Self::ring_circle(center, radius, desc.inclination);
                Self::stroke_world_loop(ctx, samples.into_iter(), RING_WIDTH, RING_COLOR);
            }
        }
    }

    fn draw_selection_ring(&self, ctx: &mut EngineContext) {
        if let Some(id) = self.selected {
            let pos = self.body_pos(id);
            let proj = ctx.camera.project(pos);
            if proj.depth > 0.1 {
                let radius = bodies::descriptor(id).visual_radius() * proj.scale + 6.0;
                ctx.vectors
                    .stroke_circle(proj.pos, radius, SELECT_RING_WIDTH, SELECT_RING_COLOR);
            }
        }
    }

    /// Anchor one label above each planet (the host renders the text).
    fn place_labels(&self, ctx: &mut EngineContext) {
        if !self.show_labels {
            return;
        }
        for (i, desc) in bodies::DESCRIPTORS.iter().enumerate().skip(1) {
            let pos = self.state.bodies[i].position;
            let proj = ctx.camera.project(pos);
            let visible = proj.depth > 0.1;
            let lift = desc.visual_radius() * proj.scale + 12.0;
            ctx.push_label(LabelInstance {
                index: i as f32,
                x: proj.pos.x,
                y: proj.pos.y - lift,
                visible: if visible { 1.0 } else { 0.0 },
            });
        }
    }

    fn emit_status(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: self.clock.speed() as f32,
            b: self.clock.direction() as f32,
            c: if self.clock.paused { 1.0 } else { 0.0 },
        });
        let (sel, dist) = match self.selected {
            Some(id) => (id.index() as f32, self.body_pos(id).length()),
            None => (-1.0, 0.0),
        };
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: sel,
            b: dist,
            c: 0.0,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_TOUR,
            a: if self.tour.is_active() { 1.0 } else { 0.0 },
            b: self.tour.index() as f32,
            c: 0.0,
        });
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_sdf_instances: 64,
            max_points: 8192,
            max_effect_points: 1024,
            max_vector_vertices: 16384,
            max_labels: 16,
            max_events: 32,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Bodies ──────────────────────────────────────────────────
        for (i, desc) in bodies::DESCRIPTORS.iter().enumerate() {
            if i > 0 {
                // Scatter starting positions so planets don't line up.
                let angle = ctx.effects.rng.next_range(0.0, std::f32::consts::TAU) as f64;
                let body = &mut self.state.bodies[i];
                body.orbit_angle = angle;
                body.position = sim::orbital_position(desc, angle);
            }

            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(desc.name)
                    .with_pos(self.state.bodies[i].position)
                    .with_mesh(mesh_for(desc)),
            );
            self.body_ids[i] = Some(id);
        }

        // ── Sun glow + corona shells ────────────────────────────────
        let sun = bodies::descriptor(BodyId::Sun);
        for (scale, alpha, color) in [
            (GLOW_SCALE, GLOW_ALPHA, sun.color),
            (CORONA_SCALE, CORONA_ALPHA, CORONA_COLOR),
        ] {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id).with_tag("sun-shell").with_mesh(
                    MeshComponent::new(
                        SDFShape::Sphere {
                            radius: sun.radius * scale,
                        },
                        SDFColor::new(color.0, color.1, color.2),
                    )
                    .with_alpha(alpha)
                    .with_emissive(1.0),
                ),
            );
            self.sun_shell_ids.push(id);
        }

        // ── Atmosphere shells ───────────────────────────────────────
        for (i, desc) in bodies::DESCRIPTORS.iter().enumerate() {
            let Some(tint) = desc.atmosphere_color else {
                continue;
            };
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("atmosphere")
                    .with_pos(self.state.bodies[i].position)
                    .with_mesh(
                        MeshComponent::new(
                            SDFShape::Sphere {
                                radius: desc.visual_radius() * ATMOSPHERE_SCALE,
                            },
                            SDFColor::new(tint.0, tint.1, tint.2),
                        )
                        .with_alpha(ATMOSPHERE_ALPHA),
                    ),
            );
            self.atmosphere_ids.push((i, id));
        }

        // ── Backdrop + solar wind ───────────────────────────────────
        backdrop::spawn_starfield(&mut ctx.points, &mut ctx.effects.rng);
        self.belt_id = Some(backdrop::spawn_belt(&mut ctx.points, &mut ctx.effects.rng));

        ctx.effects.seed_particles(
            WIND_COUNT,
            Vec3::ZERO,
            sun.radius * WIND_SPAWN_SCALE,
            WIND_MAX_DISTANCE,
            WIND_SIZE,
            WIND_COLOR,
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let dt = 1.0 / 60.0_f32;

        self.handle_input(ctx, input);

        // ── Simulation ──────────────────────────────────────────────
        sim::advance(&mut self.state, &self.clock, dt as f64);
        self.sync_bodies(ctx);
        self.tick_effects(ctx);

        // ── Tour + camera ───────────────────────────────────────────
        if let Some(stop) = self.tour.tick(dt) {
            self.selected = Some(stop);
            self.fly_to(ctx, stop, TOUR_OFFSET);
        }
        ctx.flight.tick(dt, &mut ctx.camera);

        if !ctx.flight.is_active() {
            if self.follow_earth {
                ctx.camera.target = self.body_pos(BodyId::Earth);
            }
            if self.auto_rotate {
                ctx.camera.auto_rotate(dt, AUTO_ROTATE_RATE);
            }
        }

        // ── Vector drawing (cleared each frame by clear_frame_data) ─
        if self.show_orbits {
            self.draw_orbits(ctx);
        }
        self.draw_rings(ctx);
        self.draw_selection_ring(ctx);
        self.place_labels(ctx);

        self.emit_status(ctx);
    }
}
