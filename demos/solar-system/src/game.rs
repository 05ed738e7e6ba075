/// Solar System: sun, eight planets on circular orbits, per-planet speed
/// control, hover tooltips, click-to-focus camera moves and auto-orbit.
///
/// The three.js host builds its scene graph from the manifest once, then
/// reads entity transforms and the camera block every frame.

use glam::Vec3;
use orrery_engine::*;

use crate::backdrop::{self, Theme};
use crate::bodies::{self, BodyDefinition, BodyId, Decoration};
use crate::camera;
use crate::config::SimulationConfig;
use crate::interaction::{InteractionEffect, InteractionResolver};
use crate::orbit::{self, OrbitalStore};
use crate::perf::FrameRateMonitor;

// ── Custom event kinds from the page ─────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_TOGGLE_PAUSE: u32 = 2;
const CUSTOM_TOGGLE_THEME: u32 = 3;
const CUSTOM_RESET: u32 = 4;
const CUSTOM_TOGGLE_AUTO_ORBIT: u32 = 5;
/// Viewport resize (a = width, b = height).
const CUSTOM_RESIZE: u32 = 99;

// ── Game event kinds to the page ─────────────────────────────────────

pub const EVENT_READY: f32 = 1.0;
pub const EVENT_TOOLTIP_SHOW: f32 = 2.0;
pub const EVENT_TOOLTIP_HIDE: f32 = 3.0;
pub const EVENT_PAUSE_STATE: f32 = 4.0;
pub const EVENT_THEME: f32 = 5.0;
pub const EVENT_AUTO_ORBIT_STATE: f32 = 6.0;
pub const EVENT_SPEED: f32 = 7.0;
pub const EVENT_FOCUS: f32 = 8.0;
pub const EVENT_QUALITY: f32 = 9.0;

// ── Lighting ─────────────────────────────────────────────────────────

const AMBIENT_COLOR: u32 = 0x404040;
const AMBIENT_INTENSITY: f32 = 0.2;
const SUN_LIGHT_INTENSITY: f32 = 2.0;
const SUN_LIGHT_RANGE: f32 = 100.0;
const SHADOW_MAP_SIZE: u32 = 2048;

fn flag(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

pub struct SolarSystem {
    config: SimulationConfig,
    bodies: &'static [BodyDefinition],
    store: OrbitalStore,
    /// Advanced only while unpaused; paused frames never reach it.
    sim_clock: SimulationClock,
    paused: bool,
    theme: Theme,
    auto_orbit: bool,
    sun_spin: f32,
    transition: CameraTransition,
    resolver: InteractionResolver,
    monitor: FrameRateMonitor,
    ready_sent: bool,

    // Entity IDs
    sun_id: Option<EntityId>,
    planet_ids: Vec<EntityId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_bodies(&bodies::PLANETS)
    }

    pub fn with_bodies(bodies: &'static [BodyDefinition]) -> Self {
        let config = SimulationConfig::default();
        Self {
            transition: CameraTransition::new(config.transition_duration_ms, config.transition_easing),
            monitor: FrameRateMonitor::new(config.low_fps, config.high_fps),
            config,
            bodies,
            store: OrbitalStore::new(),
            sim_clock: SimulationClock::new(),
            paused: false,
            theme: Theme::Dark,
            auto_orbit: false,
            sun_spin: 0.0,
            resolver: InteractionResolver::new(),
            ready_sent: false,
            sun_id: None,
            planet_ids: Vec::new(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn auto_orbit(&self) -> bool {
        self.auto_orbit
    }

    pub fn store(&self) -> &OrbitalStore {
        &self.store
    }

    pub fn transition(&self) -> &CameraTransition {
        &self.transition
    }

    pub fn planet_entity(&self, body: BodyId) -> Option<EntityId> {
        self.planet_ids.get(body.0).copied()
    }

    pub fn sim_elapsed(&self) -> f64 {
        self.sim_clock.elapsed()
    }

    /// World position of a body from its current orbital state.
    pub fn body_position(&self, body: BodyId) -> Option<Vec3> {
        let state = self.store.get(body)?;
        let def = self.bodies.get(body.0)?;
        Some(orbit::world_position(def.distance, state.angle, self.config.inclination_amplitude))
    }

    // ── Scene construction ───────────────────────────────────────────

    fn build_lights(&self, ctx: &mut EngineContext) {
        ctx.manifest.background = self.theme.background();
        ctx.manifest.lights = vec![
            LightDescriptor::Ambient {
                color: Color::from_hex(AMBIENT_COLOR),
                intensity: AMBIENT_INTENSITY,
            },
            LightDescriptor::Point {
                color: Color::WHITE,
                intensity: SUN_LIGHT_INTENSITY,
                range: SUN_LIGHT_RANGE,
                position: [0.0; 3],
                shadow_map_size: SHADOW_MAP_SIZE,
            },
        ];
    }

    fn spawn_stars(&self, ctx: &mut EngineContext) {
        let positions = backdrop::starfield(&mut ctx.rng, self.config.star_count, self.config.star_spread);
        let id = ctx.next_id();
        ctx.manifest.push(
            NodeDescriptor::new(
                id,
                "stars",
                Primitive::Points { positions, size: backdrop::STAR_SIZE },
                Color::from_hex(backdrop::STAR_COLOR),
            )
            .with_opacity(backdrop::STAR_OPACITY),
        );
    }

    fn spawn_sun(&mut self, ctx: &mut EngineContext) {
        let sun_id = ctx.next_id();
        let color = Color::from_hex(bodies::SUN_COLOR);
        ctx.scene.spawn(Entity::new(sun_id).with_tag("Sun"));
        ctx.manifest.push(
            NodeDescriptor::new(sun_id, "Sun", Primitive::Sphere { radius: bodies::SUN_RADIUS }, color)
                .with_opacity(bodies::SUN_OPACITY),
        );

        let glow_id = ctx.next_id();
        ctx.manifest.push(
            NodeDescriptor::new(
                glow_id,
                "Sun/glow",
                Primitive::Sphere { radius: bodies::SUN_GLOW_RADIUS },
                Color::from_hex(bodies::SUN_GLOW_COLOR),
            )
            .with_parent(sun_id)
            .with_opacity(bodies::SUN_GLOW_OPACITY),
        );
        self.sun_id = Some(sun_id);
    }

    fn spawn_planet(&mut self, ctx: &mut EngineContext, def: &BodyDefinition) {
        let body = self.store.create(def, &mut ctx.rng);
        let pos = self.body_position(body).unwrap_or(Vec3::ZERO);
        let color = Color::from_hex(def.color);

        let id = ctx.next_id();
        ctx.scene.spawn(Entity::new(id).with_tag(def.name).with_pos(pos));
        ctx.manifest.push(
            NodeDescriptor::new(id, def.name, Primitive::Sphere { radius: def.radius }, color)
                .lit(bodies::PLANET_SHININESS)
                .with_shadows()
                .with_info(def.name, def.info),
        );
        self.resolver.register(id, body);
        self.planet_ids.push(id);

        // Orbit guide: static, not pickable
        let guide_id = ctx.next_id();
        ctx.manifest.push(
            NodeDescriptor::new(
                guide_id,
                format!("{}/orbit", def.name),
                Primitive::Ring {
                    inner: def.distance - bodies::ORBIT_GUIDE_HALF_WIDTH,
                    outer: def.distance + bodies::ORBIT_GUIDE_HALF_WIDTH,
                    segments: bodies::ORBIT_GUIDE_SEGMENTS,
                },
                Color::from_hex(bodies::ORBIT_GUIDE_COLOR),
            )
            .with_opacity(bodies::ORBIT_GUIDE_OPACITY),
        );

        for decoration in def.decorations {
            let deco_id = ctx.next_id();
            let node = match *decoration {
                Decoration::Ring { inner_offset, outer_offset, segments, color, opacity } => NodeDescriptor::new(
                    deco_id,
                    format!("{}/ring", def.name),
                    Primitive::Ring {
                        inner: def.radius + inner_offset,
                        outer: def.radius + outer_offset,
                        segments,
                    },
                    Color::from_hex(color),
                )
                .with_opacity(opacity),
                Decoration::Atmosphere { scale, color, opacity } => NodeDescriptor::new(
                    deco_id,
                    format!("{}/atmosphere", def.name),
                    Primitive::Sphere { radius: def.radius * scale },
                    Color::from_hex(color),
                )
                .with_opacity(opacity),
            };
            ctx.manifest.push(node.with_parent(id));
        }
    }

    // ── Input ────────────────────────────────────────────────────────

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match event {
            InputEvent::PointerMove { pos, hits } => match self.resolver.pointer_move(pos, hits) {
                Some(InteractionEffect::ShowInfo { entity, at, .. }) => {
                    if ctx.emit_event(GameEvent::new(EVENT_TOOLTIP_SHOW, entity.as_f32(), at.x, at.y)) {
                        self.resolver.set_tooltip_visible(true);
                    }
                }
                Some(InteractionEffect::HideInfo) => {
                    if ctx.emit_event(GameEvent::signal(EVENT_TOOLTIP_HIDE)) {
                        self.resolver.set_tooltip_visible(false);
                    }
                }
                _ => {}
            },
            InputEvent::PointerClick { hits, .. } => {
                if let Some(InteractionEffect::Focus { body, entity }) = self.resolver.pointer_click(hits) {
                    self.focus(ctx, body, entity);
                }
            }
            InputEvent::Custom { kind, a, b, .. } => match *kind {
                CUSTOM_SET_SPEED => self.set_speed(ctx, *a, *b),
                CUSTOM_TOGGLE_PAUSE => {
                    self.paused = !self.paused;
                    log::info!("paused: {}", self.paused);
                    ctx.emit_event(GameEvent::new(EVENT_PAUSE_STATE, flag(self.paused), 0.0, 0.0));
                }
                CUSTOM_TOGGLE_THEME => {
                    self.theme = self.theme.toggled();
                    ctx.manifest.background = self.theme.background();
                    log::info!("theme: {:?}", self.theme);
                    ctx.emit_event(GameEvent::new(
                        EVENT_THEME,
                        self.theme.as_f32(),
                        self.theme.background_hex() as f32,
                        0.0,
                    ));
                }
                CUSTOM_RESET => self.reset(ctx),
                CUSTOM_TOGGLE_AUTO_ORBIT => {
                    self.auto_orbit = !self.auto_orbit;
                    log::info!("auto-orbit: {}", self.auto_orbit);
                    ctx.emit_event(GameEvent::new(EVENT_AUTO_ORBIT_STATE, flag(self.auto_orbit), 0.0, 0.0));
                }
                CUSTOM_RESIZE => ctx.camera.resize(*a, *b),
                other => log::warn!("ignoring unknown custom event {}", other),
            },
        }
    }

    fn set_speed(&mut self, ctx: &mut EngineContext, index: f32, speed: f32) {
        if !(index >= 0.0) || index.fract() != 0.0 {
            log::warn!("ignoring speed change for invalid body index {}", index);
            return;
        }
        match self.store.set_speed(BodyId(index as usize), speed) {
            Ok(()) => {
                ctx.emit_event(GameEvent::new(EVENT_SPEED, index, speed, 0.0));
            }
            Err(e) => log::warn!("ignoring speed change: {}", e),
        }
    }

    fn focus(&mut self, ctx: &mut EngineContext, body: BodyId, entity: EntityId) {
        let (Some(target), Some(def)) = (self.body_position(body), self.bodies.get(body.0)) else {
            return;
        };
        let pose = camera::focus_pose(target, def.radius);
        let superseded = self.transition.request(&ctx.camera.pose, pose, ctx.time.now_ms);
        log::info!("focus on {}{}", def.name, if superseded { " (superseding)" } else { "" });
        ctx.emit_event(GameEvent::new(EVENT_FOCUS, entity.as_f32(), 0.0, 0.0));
    }

    /// Base speeds everywhere, camera home, any focus move dropped.
    fn reset(&mut self, ctx: &mut EngineContext) {
        self.store.reset_all();
        self.transition.cancel();
        ctx.camera.pose = camera::home_pose(self.config.home_position);
        for (id, state) in self.store.iter() {
            ctx.emit_event(GameEvent::new(EVENT_SPEED, id.0 as f32, state.speed, 0.0));
        }
        log::info!("reset speeds and camera");
    }

    // ── Per-frame ────────────────────────────────────────────────────

    fn sync_entities(&self, ctx: &mut EngineContext) {
        if let Some(entity) = self.sun_id.and_then(|id| ctx.scene.get_mut(id)) {
            entity.spin = self.sun_spin;
        }
        for (body, state) in self.store.iter() {
            let (Some(id), Some(def)) = (self.planet_ids.get(body.0), self.bodies.get(body.0)) else {
                continue;
            };
            if let Some(entity) = ctx.scene.get_mut(*id) {
                entity.pos = orbit::world_position(def.distance, state.angle, self.config.inclination_amplitude);
                entity.spin = state.spin;
            }
        }
    }

    /// A running focus move owns the camera; auto-orbit only drives it
    /// when no move is active.
    fn update_camera(&mut self, ctx: &mut EngineContext) {
        let mut pose = ctx.camera.pose;
        match self.transition.tick(ctx.time.now_ms, &mut pose) {
            TweenStatus::Running | TweenStatus::Finished => ctx.camera.pose = pose,
            TweenStatus::Idle => {
                if self.auto_orbit {
                    ctx.camera.pose = camera::auto_orbit_pose(&self.config.auto_orbit, ctx.time.wall_elapsed as f32);
                }
            }
        }
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
            max_instances: 32,
            max_events: 64,
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> EngineResult<()> {
        let config = SimulationConfig::from_json(json)?;
        self.transition = CameraTransition::new(config.transition_duration_ms, config.transition_easing);
        self.monitor = FrameRateMonitor::new(config.low_fps, config.high_fps);
        self.config = config;
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        bodies::validate(self.bodies)?;
        if let Some(seed) = self.config.seed {
            ctx.rng = Rng::new(seed);
        }
        ctx.camera.pose = camera::home_pose(self.config.home_position);

        self.build_lights(ctx);
        self.spawn_stars(ctx);
        self.spawn_sun(ctx);
        for def in self.bodies {
            self.spawn_planet(ctx, def);
        }

        log::info!(
            "solar system: {} bodies, {} entities, {} nodes",
            self.store.len(),
            ctx.scene.len(),
            ctx.manifest.nodes.len()
        );
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if !self.ready_sent {
            ctx.emit_event(GameEvent::signal(EVENT_READY));
            self.ready_sent = true;
        }

        // Only the latest pointer position matters for the tooltip.
        let last_move = input
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, InputEvent::PointerMove { .. }))
            .map(|(i, _)| i)
            .last();
        for (i, event) in input.iter().enumerate() {
            if matches!(event, InputEvent::PointerMove { .. }) && Some(i) != last_move {
                continue;
            }
            self.handle_input(ctx, event);
        }

        // ── Advance simulation ───────────────────────────────────────
        if !self.paused {
            let dt = self.sim_clock.advance(ctx.time.dt);
            orbit::step(&mut self.store, dt, self.config.orbit_rate_scale);
            self.sun_spin += dt * self.config.sun_spin_rate;
        }
        self.sync_entities(ctx);

        // ── Camera (not gated by pause) ──────────────────────────────
        self.update_camera(ctx);

        if let Some(quality) = self.monitor.record(ctx.time.now_ms) {
            ctx.emit_event(GameEvent::new(EVENT_QUALITY, quality.as_f32(), 0.0, 0.0));
        }
    }
}
