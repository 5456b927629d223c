//! Error types for arcball-rs.

use thiserror::Error;

/// The main error type for arcball-rs operations.
#[derive(Error, Debug)]
pub enum ArcballError {
    /// The viewport has a zero dimension, so pixels cannot be normalized.
    #[error("degenerate viewport {width}x{height} - call set_window_size() with a non-zero size first")]
    DegenerateViewport { width: u32, height: u32 },

    /// A pixel point or projected vector contained NaN or infinity.
    #[error("point is not finite")]
    NonFinitePoint,

    /// An option value is outside its legal domain.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for arcball-rs operations.
pub type Result<T> = std::result::Result<T, ArcballError>;
