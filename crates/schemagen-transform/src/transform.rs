//! Transform trait
//!
//! Provides the [`Transform`] contract and [`FnTransform`], a closure adapter
//! for ad-hoc transforms.

use crate::context::TransformContext;
use crate::error::TransformError;
use schemagen_artifact::FileArtifact;
use schemagen_schema::SchemaDocument;
use std::fmt;

/// A named generation step over a schema document
///
/// # Contract
/// `run` must not mutate its inputs or perform I/O. For the same document
/// and context it must return the same artifacts in the same order.
pub trait Transform: Send + Sync + fmt::Debug {
    /// Stable identifier used in reports and configuration
    fn name(&self) -> &str;

    /// Human-readable summary
    fn description(&self) -> &str;

    /// Produce artifacts for `document`
    ///
    /// # Errors
    /// Returns error if the transform cannot complete; the pipeline records
    /// it and moves on to the next transform
    fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<Vec<FileArtifact>, TransformError>;
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<Vec<FileArtifact>, TransformError> {
        (**self).run(document, context)
    }
}

type TransformFn =
    dyn Fn(&SchemaDocument, &TransformContext) -> Result<Vec<FileArtifact>, TransformError>
        + Send
        + Sync;

/// Transform backed by a closure
pub struct FnTransform {
    name: String,
    description: String,
    func: Box<TransformFn>,
}

impl FnTransform {
    /// Wrap a closure as a transform
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&SchemaDocument, &TransformContext) -> Result<Vec<FileArtifact>, TransformError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            func: Box::new(func),
        }
    }
}

impl fmt::Debug for FnTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Transform for FnTransform {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<Vec<FileArtifact>, TransformError> {
        (self.func)(document, context)
    }
}
