//! Error types for catalog and settings handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the portfolio's state
#[derive(Error, Debug)]
pub enum Error {
    /// The filter set has no `all` entry
    #[error("Filter set is missing the \"{}\" filter", crate::state::data::ALL_FILTER)]
    MissingAllFilter,

    /// Two filters share the same id
    #[error("Duplicate filter id: {0}")]
    DuplicateFilter(String),

    /// A photo uses the reserved `all` id as its own category
    #[error("Photo {photo_id} uses the reserved category \"{}\"", crate::state::data::ALL_FILTER)]
    ReservedCategory { photo_id: i64 },

    /// Two photos share the same id
    #[error("Duplicate photo id: {0}")]
    DuplicatePhotoId(i64),

    /// Failed to read a file from disk
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed catalog or settings JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
