use crate::api::error::EngineResult;
use crate::api::types::{EntityId, GameEvent};
use crate::assets::manifest::SceneManifest;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::FrameTime;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of render instances (default: 128).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_deg: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_instances: 128,
            max_events: 32,
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply a JSON configuration supplied by the host. Called before init.
    fn configure(&mut self, _json: &str) -> EngineResult<()> {
        Ok(())
    }

    /// Build the scene and the manifest the host constructs its graph from.
    /// An error here is fatal.
    fn init(&mut self, ctx: &mut EngineContext) -> EngineResult<()>;

    /// The per-frame tick. Runs exactly once per host frame; `ctx.time`
    /// holds this frame's timing.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
/// This is the single simulation context: created at startup, dropped at teardown.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub manifest: SceneManifest,
    pub events: Vec<GameEvent>,
    pub time: FrameTime,
    /// Seeded by the runner; games draw start angles and star positions from it.
    pub rng: Rng,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default(), 42)
    }

    pub fn with_config(config: &GameConfig, seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::new(config.fov_y_deg, config.near, config.far),
            manifest: SceneManifest::default(),
            events: Vec::with_capacity(config.max_events),
            time: FrameTime::default(),
            rng: Rng::new(seed),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    /// Events beyond the per-frame capacity are dropped; returns whether
    /// this one was queued.
    pub fn emit_event(&mut self, event: GameEvent) -> bool {
        if self.events.len() < self.max_events {
            self.events.push(event);
            true
        } else {
            log::debug!("event buffer full, dropping kind {}", event.kind);
            false
        }
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
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
    fn ids_are_unique_and_start_at_one() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn events_are_capped_per_frame() {
        let config = GameConfig { max_events: 2, ..GameConfig::default() };
        let mut ctx = EngineContext::with_config(&config, 1);
        let queued: Vec<bool> = (0..5).map(|k| ctx.emit_event(GameEvent::signal(k as f32))).collect();
        assert_eq!(queued, vec![true, true, false, false, false]);
        assert_eq!(ctx.events.len(), 2);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn camera_uses_configured_projection() {
        let config = GameConfig { fov_y_deg: 60.0, ..GameConfig::default() };
        let ctx = EngineContext::with_config(&config, 1);
        assert_eq!(ctx.camera.fov_y_deg, 60.0);
        assert_eq!(ctx.camera.far, 1000.0);
    }
}
