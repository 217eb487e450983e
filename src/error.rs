//! Error types for feature extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting features from a corpus
#[derive(Error, Debug)]
pub enum FeatureError {
    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode payload content
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid run configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid path template
    #[error("Invalid path template {template:?}: {details}")]
    Template { template: String, details: String },
}

impl FeatureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for feature extraction operations
pub type Result<T> = std::result::Result<T, FeatureError>;
