//! Error Types
//!
//! All public APIs that can fail return [`Result<T>`], an alias for
//! `std::result::Result<T, KeystageError>`.
//!
//! Recoverable conditions are deliberately *not* errors: a zero-length
//! interpolation segment holds the last value, and a zero-length vector
//! passed to [`crate::math::safe_normalize`] is returned unchanged, so the
//! pipeline keeps running through degenerate interactive states.

use thiserror::Error;

/// The main error type for the keystage engine.
#[derive(Error, Debug)]
pub enum KeystageError {
    /// A UI transform field did not parse as a finite number. The previous
    /// valid vector is retained; nothing is partially applied.
    #[error("Invalid transform input for {field}: {value:?}")]
    InvalidTransformInput {
        /// Which field was malformed, e.g. `"translation.x"`
        field: &'static str,
        /// The rejected raw text
        value: String,
    },

    /// A keyframe capture was not strictly after the previous keyframe.
    /// Captures must arrive in increasing frame order.
    #[error("Keyframe at frame {frame} is not after the previous keyframe at frame {last}")]
    OutOfOrderKeyframe {
        /// The rejected frame index
        frame: u32,
        /// The last accepted frame index
        last: u32,
    },

    /// Writing or encoding an exported frame failed. The render sequence
    /// still advances past the dropped frame.
    #[error("Failed to export frame {frame}: {reason}")]
    FrameExportFailed {
        /// Zero-based frame index matching the animation clock
        frame: u32,
        /// Underlying encode or I/O failure
        reason: String,
    },

    /// Supplied geometry buffers do not form a valid triangle soup.
    /// Aborts that single load; existing models are unaffected.
    #[error("Geometry load failed: {0}")]
    GeometryLoadFailed(String),

    /// A model handle did not resolve in the registry.
    #[error("Model not found (stale or foreign handle)")]
    ModelNotFound,

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, KeystageError>`.
pub type Result<T> = std::result::Result<T, KeystageError>;
