//! Error types shared by the engine, the web bridge and games.

use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures the engine surfaces to the host.
///
/// Only initialization and configuration can fail. The frame loop itself
/// never returns errors; invalid user input is logged and ignored by games.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The game could not build its scene. Fatal: the host shows a reload prompt.
    #[error("initialization failed: {0}")]
    Init(String),

    /// A JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The scene manifest could not be serialized for the host.
    #[error("manifest serialization failed: {0}")]
    Manifest(String),

    /// An operation that needs an initialized game ran before `init`.
    #[error("game not initialized")]
    NotInitialized,

    /// `init` was called twice. There is no reinitialization path.
    #[error("game already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_from_serde() {
        let err: EngineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn init_error_message() {
        let err = EngineError::Init("no bodies".into());
        assert_eq!(err.to_string(), "initialization failed: no bodies");
    }
}
