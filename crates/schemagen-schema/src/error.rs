//! Error types for schema loading and validation

/// Errors while loading or validating a schema document
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// JSON syntax or shape error
    #[error("invalid JSON schema document: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML syntax error
    #[error("invalid YAML schema document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Top-level value is neither a node, a page list nor a `pageSchema` envelope
    #[error("unsupported document shape: {0}")]
    InvalidShape(String),

    /// Tree is deeper than the configured limit
    #[error("document depth {depth} exceeds limit {limit}")]
    TooDeep { depth: usize, limit: usize },

    /// Tree has more nodes than the configured limit
    #[error("document has more than {limit} nodes")]
    TooManyNodes { limit: usize },
}

impl SchemaError {
    /// Create shape error
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    /// Whether the error came from validation rather than parsing
    #[inline]
    #[must_use]
    pub fn is_limit_violation(&self) -> bool {
        matches!(self, Self::TooDeep { .. } | Self::TooManyNodes { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_errors_display() {
        let err = SchemaError::TooDeep { depth: 600, limit: 512 };
        assert_eq!(err.to_string(), "document depth 600 exceeds limit 512");
        assert!(err.is_limit_violation());
        assert!(!SchemaError::invalid_shape("number").is_limit_violation());
    }
}
