//! Error types for asset resources

/// Errors while loading resource maps
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// JSON syntax or shape error
    #[error("invalid resource JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource entry violates an invariant
    #[error("invalid resource '{key}': {reason}")]
    InvalidResource { key: String, reason: String },

    /// Icon width or height is unusable
    #[error("{dimension} must be a finite positive number, got {value}")]
    InvalidDimension { dimension: &'static str, value: f64 },

    /// Iconify collection is malformed
    #[error("invalid iconify collection: {0}")]
    Iconify(String),
}

impl AssetError {
    /// Create invalid resource error
    pub fn invalid_resource(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResource {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Attribute an entry-level error to the resource `key`
    #[must_use]
    pub fn for_key(self, key: impl Into<String>) -> Self {
        match self {
            Self::InvalidDimension { .. } => Self::invalid_resource(key, self.to_string()),
            other => other,
        }
    }
}
