use orrery_engine::{
    Game, GameConfig, EngineContext, EngineError, EngineResult,
    EntityId, InputEvent, InputQueue, PointerPos, RenderBuffer,
    SimulationClock, FrameTime, CameraUniform, ProtocolLayout,
};
use orrery_engine::bridge::protocol::{
    HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_PROTOCOL_VERSION, HEADER_MAX_INSTANCES,
    HEADER_INSTANCE_COUNT, HEADER_MAX_EVENTS, HEADER_EVENT_COUNT, HEADER_WALL_TIME_MS,
    HEADER_FRAME_DT, PROTOCOL_VERSION,
};
use orrery_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
///
/// One `tick` is one host animation frame: the game updates exactly once,
/// then the host-facing buffers are rebuilt. The host reads them after
/// `tick` returns, so simulation always completes before drawing.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    /// Wall clock, advanced on every tick regardless of game pause state.
    wall_clock: SimulationClock,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    camera_block: CameraUniform,
    seed: u64,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        Self::with_seed(game, 42)
    }

    /// Create a runner whose context RNG starts from `seed`.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        Self {
            ctx: EngineContext::with_config(&config, seed),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            game,
            input: InputQueue::new(),
            wall_clock: SimulationClock::new(),
            layout,
            config,
            header: [0.0; HEADER_FLOATS],
            camera_block: CameraUniform::default(),
            seed,
            initialized: false,
        }
    }

    /// Forward a JSON configuration to the game. Only allowed before init.
    pub fn configure(&mut self, json: &str) -> EngineResult<()> {
        if self.initialized {
            return Err(EngineError::AlreadyInitialized);
        }
        self.game.configure(json)
    }

    /// Initialize the game. Call once after construction (and after
    /// `configure`, if used). There is no reinitialization path.
    pub fn init(&mut self) -> EngineResult<()> {
        if self.initialized {
            return Err(EngineError::AlreadyInitialized);
        }
        // The game may have changed its config in `configure`.
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx = EngineContext::with_config(&self.config, self.seed);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);

        self.game.init(&mut self.ctx)?;
        self.initialized = true;
        self.build_frame();
        log::debug!(
            "runner: {} entities, {} manifest nodes",
            self.ctx.scene.len(),
            self.ctx.manifest.nodes.len()
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Queue a pointer move with the host's pick result (entity ids, nearest first).
    pub fn push_pointer_move(&mut self, pos: PointerPos, hits: &[u32]) {
        let hits = hits.iter().copied().map(EntityId).collect();
        self.input.push(InputEvent::PointerMove { pos, hits });
    }

    /// Queue a pointer click with the host's pick result.
    pub fn push_pointer_click(&mut self, pos: PointerPos, hits: &[u32]) {
        let hits = hits.iter().copied().map(EntityId).collect();
        self.input.push(InputEvent::PointerClick { pos, hits });
    }

    /// Run one frame: advance the wall clock by `dt` seconds (unclamped),
    /// update the game once, then rebuild the host buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        self.wall_clock.advance(dt);
        self.ctx.time = FrameTime::from_clock(&self.wall_clock);

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.build_frame();
    }

    fn build_frame(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera_block = self.ctx.camera.uniform();

        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.wall_clock.ticks() as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_WALL_TIME_MS] = self.wall_clock.elapsed_ms() as f32;
        h[HEADER_FRAME_DT] = self.wall_clock.last_delta();
    }

    /// JSON scene manifest for the host to build its scene graph from.
    pub fn scene_manifest_json(&self) -> EngineResult<String> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        self.ctx
            .manifest
            .to_json()
            .map_err(|e| EngineError::Manifest(e.to_string()))
    }

    /// Release scene resources on page teardown.
    pub fn shutdown(&mut self) {
        self.ctx.scene.clear();
        self.ctx.manifest.nodes.clear();
        self.render_buffer.clear();
        self.input.drain();
        log::info!("runner: shut down after {} frames", self.wall_clock.ticks());
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_block as *const CameraUniform as *const f32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
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
    use orrery_engine::{Entity, GameEvent};

    /// Minimal game that records what the runner asked of it.
    #[derive(Default)]
    struct Recorder {
        updates: u32,
        last_dt: f32,
        last_now_ms: f64,
        inputs_seen: usize,
        fail_init: bool,
        configured: Option<String>,
    }

    impl Game for Recorder {
        fn configure(&mut self, json: &str) -> EngineResult<()> {
            self.configured = Some(json.to_string());
            Ok(())
        }

        fn init(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
            if self.fail_init {
                return Err(EngineError::Init("recorder refused".into()));
            }
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_tag("recorder"));
            Ok(())
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.last_dt = ctx.time.dt;
            self.last_now_ms = ctx.time.now_ms;
            self.inputs_seen += input.len();
            ctx.emit_event(GameEvent::signal(1.0));
        }
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.tick(0.016);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn one_update_per_tick_even_for_huge_deltas() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.init().unwrap();
        runner.tick(30.0);
        assert_eq!(runner.game().updates, 1);
        assert_eq!(runner.game().last_dt, 30.0);
        assert!((runner.game().last_now_ms - 30_000.0).abs() < 1e-6);
    }

    #[test]
    fn input_is_seen_once_then_drained() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.init().unwrap();
        runner.push_pointer_move(PointerPos::default(), &[3, 1]);
        runner.push_pointer_click(PointerPos::default(), &[]);
        runner.tick(0.016);
        runner.tick(0.016);
        assert_eq!(runner.game().inputs_seen, 2);
    }

    #[test]
    fn events_reset_each_frame() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.init().unwrap();
        runner.tick(0.016);
        runner.tick(0.016);
        assert_eq!(runner.game_events_len(), 1);
    }

    #[test]
    fn frame_buffers_reflect_scene() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.init().unwrap();
        assert_eq!(runner.instance_count(), 1);
        runner.tick(0.5);
        assert_eq!(runner.header[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(runner.header[HEADER_INSTANCE_COUNT], 1.0);
        assert_eq!(runner.header[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(runner.header[HEADER_FRAME_DT], 0.5);
    }

    #[test]
    fn init_failure_is_reported_and_leaves_runner_idle() {
        let mut runner = GameRunner::new(Recorder { fail_init: true, ..Recorder::default() });
        let err = runner.init().unwrap_err();
        assert!(matches!(err, EngineError::Init(_)));
        assert!(!runner.is_initialized());
        runner.tick(0.016);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn configure_and_init_are_one_shot() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.configure("{}").unwrap();
        assert_eq!(runner.game().configured.as_deref(), Some("{}"));
        runner.init().unwrap();
        assert!(matches!(runner.init(), Err(EngineError::AlreadyInitialized)));
        assert!(matches!(runner.configure("{}"), Err(EngineError::AlreadyInitialized)));
    }

    #[test]
    fn manifest_requires_init() {
        let mut runner = GameRunner::new(Recorder::default());
        assert!(matches!(runner.scene_manifest_json(), Err(EngineError::NotInitialized)));
        runner.init().unwrap();
        assert!(runner.scene_manifest_json().unwrap().contains("\"nodes\""));
    }
}
