//! Error types for GeoJSON simplification
//!
//! Only fatal input/output problems are errors. Per-geometry problems are
//! recorded in [`crate::SimplifyStats`] and the geometry is passed through.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for simplification runs
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected top-level type 'FeatureCollection', found '{0}'")]
    NotAFeatureCollection(String),

    #[error("invalid tolerance {0}: must be a finite number >= 0")]
    InvalidTolerance(f64),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for simplification operations
pub type Result<T> = std::result::Result<T, Error>;
