// extensions/mod.rs
//
// Optional extension modules.
// These are decoupled from core Entity/Scene; games opt in by creating these systems.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp_vec3, ease_vec3};
pub use tween::{CameraTransition, CameraTween, TweenStatus};
