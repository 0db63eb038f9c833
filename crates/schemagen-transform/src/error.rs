//! Error types for transforms

use schemagen_artifact::ArtifactError;

/// Errors produced while running or resolving a transform
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Transform reported a failure
    #[error("transform failed: {0}")]
    Failed(String),

    /// Two inputs disagree on a value that must be unique
    #[error("conflicting versions for '{package}': {existing} vs {incoming}")]
    Conflict {
        package: String,
        existing: String,
        incoming: String,
    },

    /// Output could not be serialized
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Emitted artifact was invalid
    #[error("invalid artifact: {0}")]
    Artifact(#[from] ArtifactError),

    /// Transform panicked; the payload message is kept when it is a string
    #[error("transform panicked: {0}")]
    Panicked(String),

    /// No transform registered under this name
    #[error("unknown transform '{0}'")]
    Unknown(String),
}

impl TransformError {
    /// Create failure error
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Create conflict error
    pub fn conflict(
        package: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            package: package.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    /// Whether the error was caught from a panic
    #[inline]
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_display() {
        let err = TransformError::conflict("element-plus", "2.4.0", "2.5.1");
        assert_eq!(
            err.to_string(),
            "conflicting versions for 'element-plus': 2.4.0 vs 2.5.1"
        );
        assert!(!err.is_panic());
    }

    #[test]
    fn panicked_is_flagged() {
        assert!(TransformError::Panicked("boom".into()).is_panic());
    }
}
