//! Error types for the playback session

use thiserror::Error;

/// Playback errors
///
/// Produced by playback element implementations. The session itself never
/// propagates these to its callers: command failures are terminal at the
/// session boundary and only logged.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Playback element command failed
    #[error("Playback element error: {0}")]
    Element(String),

    /// Seek target outside the loaded resource
    #[error("Invalid seek position: {0} seconds")]
    InvalidSeekPosition(f64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlayerError {
    /// Create a playback element error
    pub fn element(msg: impl Into<String>) -> Self {
        Self::Element(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
