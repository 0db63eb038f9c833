//! Error types for the pipeline
//!
//! Provides error handling for:
//! - Documents rejected before any transform runs
//! - Configuration loading
//! - Artifact persistence

use schemagen_artifact::PathError;
use schemagen_schema::SchemaError;
use schemagen_transform::TransformError;
use std::path::PathBuf;

/// Fatal pipeline error
///
/// Per-transform failures are not errors at this level; they are recorded
/// in the [`PipelineReport`](crate::PipelineReport).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Document failed validation
    #[error("invalid document: {0}")]
    InvalidDocument(#[from] SchemaError),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Transform name not in the registry
    #[error("unknown transform '{0}'")]
    UnknownTransform(String),

    /// A path option does not parse
    #[error("invalid path for '{field}': {source}")]
    InvalidPath {
        field: &'static str,
        #[source]
        source: PathError,
    },

    /// A string option is empty
    #[error("'{0}' must not be empty")]
    Empty(&'static str),

    /// Registry could not build a transform
    #[error("transform setup failed: {0}")]
    Transform(TransformError),
}

impl From<TransformError> for ConfigError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Unknown(name) => Self::UnknownTransform(name),
            other => Self::Transform(other),
        }
    }
}

/// Errors while persisting artifacts
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Filesystem failure
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sink refused the artifact
    #[error("artifact '{key}' rejected: {reason}")]
    Rejected { key: String, reason: String },
}

impl SinkError {
    /// Create I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create rejection error
    pub fn rejected(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
