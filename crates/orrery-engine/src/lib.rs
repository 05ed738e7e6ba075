pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use api::error::{EngineError, EngineResult};
pub use components::entity::Entity;
pub use components::mesh::{Color, Shading};
pub use core::scene::Scene;
pub use core::time::{SimulationClock, FrameTime};
pub use core::rng::Rng;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{CameraPose, CameraUniform, PerspectiveCamera};
pub use input::queue::{InputEvent, InputQueue, PointerPos};
pub use assets::manifest::{SceneManifest, NodeDescriptor, Primitive, LightDescriptor};
pub use bridge::protocol::ProtocolLayout;
pub use extensions::easing::Easing;
pub use extensions::tween::{CameraTransition, CameraTween, TweenStatus};
