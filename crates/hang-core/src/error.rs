use thiserror::Error;

/// Failures at the platform seams. None of them are fatal: callers log and
/// carry on with a blank or silent backdrop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackdropError {
    #[error("canvas element not found")]
    MissingCanvas,
    #[error("2d drawing context unavailable")]
    MissingContext,
    #[error("audio playback failed: {0}")]
    Playback(String),
}
