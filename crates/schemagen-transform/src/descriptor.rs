//! Transform descriptors
//!
//! A [`TransformDescriptor`] is one entry of a pipeline's ordered transform
//! list: either a built-in or a caller-supplied transform.

use crate::context::TransformContext;
use crate::dependencies::ComponentDependencies;
use crate::error::TransformError;
use crate::icons::IconAssets;
use crate::transform::Transform;
use schemagen_artifact::FileArtifact;
use schemagen_schema::SchemaDocument;

/// Tagged transform variant
#[derive(Debug)]
pub enum TransformDescriptor {
    /// Icon asset files
    IconAssets,
    /// `dependencies.json` manifest
    ComponentDependencies,
    /// Caller-supplied transform
    Custom(Box<dyn Transform>),
}

impl TransformDescriptor {
    /// Wrap a custom transform
    pub fn custom(transform: impl Transform + 'static) -> Self {
        Self::Custom(Box::new(transform))
    }

    /// Whether this is a built-in variant
    #[inline]
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn as_transform(&self) -> &dyn Transform {
        match self {
            Self::IconAssets => &IconAssets,
            Self::ComponentDependencies => &ComponentDependencies,
            Self::Custom(transform) => transform.as_ref(),
        }
    }
}

impl Transform for TransformDescriptor {
    fn name(&self) -> &str {
        self.as_transform().name()
    }

    fn description(&self) -> &str {
        self.as_transform().description()
    }

    fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<Vec<FileArtifact>, TransformError> {
        self.as_transform().run(document, context)
    }
}
