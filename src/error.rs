//! Error types for paper-radar.

use std::io;
use thiserror::Error;

/// Result type alias for paper-radar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for paper-radar.
///
/// Rendering itself never fails; these variants cover the boundary I/O
/// around it (state file, output files) and user-supplied inputs.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// State file or paper list could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A digest date was not in `YYYY-MM-DD` form.
    #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
