//! Error types for the selection engine and its settings.
//!
//! Interaction-time conditions (missing canvas measurement, stale ids during a
//! drag) are never surfaced as errors; the handlers absorb them. These types
//! cover explicit commands made by the host.

use crate::types::SelectionId;
use thiserror::Error;

/// Errors returned by store and engine commands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    /// No selection with this id exists
    #[error("Selection not found: {0}")]
    NotFound(SelectionId),

    /// A selection with this id is already stored
    #[error("Duplicate selection id: {0}")]
    DuplicateId(SelectionId),

    /// Scale factor must be finite and positive
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f32),

    /// Image has no pixels on one of its axes
    #[error("Invalid image size: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
}

/// Result type alias for engine operations
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<&str> for SettingsError {
    fn from(s: &str) -> Self {
        SettingsError::Invalid(s.to_string())
    }
}
