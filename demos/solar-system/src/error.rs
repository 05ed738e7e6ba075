use orrery_engine::EngineError;
use thiserror::Error;

/// Errors raised by the solar-system model.
///
/// Invalid registry data is fatal at init. Bad user input (unknown body,
/// negative speed) is reported so the controller can log and ignore it.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("body registry is empty")]
    EmptyRegistry,

    #[error("duplicate body name: {0}")]
    DuplicateBody(String),

    #[error("body {name}: {field} must be positive, got {value}")]
    NonPositiveDimension {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("unknown body index {0}")]
    UnknownBody(usize),

    #[error("speed for body {index} must be non-negative, got {speed}")]
    NegativeSpeed { index: usize, speed: f32 },
}

impl From<OrreryError> for EngineError {
    fn from(err: OrreryError) -> Self {
        EngineError::Init(err.to_string())
    }
}
