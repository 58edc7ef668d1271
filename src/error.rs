//! Error type shared by the flipbook components and resources.

use thiserror::Error;

/// Errors raised while building or configuring a flipbook.
///
/// Playback itself never fails: out-of-range inputs are clamped and an empty
/// frame list only produces a warning.
#[derive(Debug, Error)]
pub enum FlipbookError {
    /// Duration must be finite and strictly positive.
    #[error("invalid flipbook duration {0}: must be finite and greater than zero")]
    InvalidDuration(f32),

    /// INI configuration could not be read, written or parsed.
    #[error("flipbook config error: {0}")]
    Config(String),

    /// JSON configuration was malformed.
    #[error("flipbook config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A clip name was looked up that was never registered.
    #[error("unknown flipbook clip '{0}'")]
    UnknownClip(String),
}

pub type Result<T> = std::result::Result<T, FlipbookError>;
