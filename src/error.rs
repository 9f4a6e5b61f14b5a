//! Error types shared by the store and the flows

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("refusing to overwrite existing snapshot {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TallyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TallyError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TallyError::Json {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the data on disk could not be understood,
    /// as opposed to the disk itself failing.
    pub fn is_corruption(&self) -> bool {
        matches!(self, TallyError::Json { .. })
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
