//! Pipeline orchestration
//!
//! A [`Pipeline`] validates a document once, then runs its transforms in
//! declared order. A transform that returns an error or panics is recorded
//! and the remaining transforms still run.

use crate::config::PipelineConfig;
use crate::error::{ConfigError, PipelineError};
use crate::report::PipelineReport;
use schemagen_artifact::FileArtifact;
use schemagen_schema::{validate, Limits, SchemaDocument};
use schemagen_transform::{
    Transform, TransformContext, TransformDescriptor, TransformError, TransformOptions,
    TransformRegistry,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Ordered list of transforms plus document limits and transform options
#[derive(Debug)]
pub struct Pipeline {
    transforms: Vec<TransformDescriptor>,
    limits: Limits,
    options: TransformOptions,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::builder()
            .transform(TransformDescriptor::IconAssets)
            .transform(TransformDescriptor::ComponentDependencies)
            .build()
    }
}

impl Pipeline {
    /// Pipeline over `transforms` with default limits
    #[must_use]
    pub fn new(transforms: Vec<TransformDescriptor>) -> Self {
        Self {
            transforms,
            limits: Limits::default(),
            options: TransformOptions::default(),
        }
    }

    /// Start a builder
    #[inline]
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Build from configuration using the built-in registry
    ///
    /// # Errors
    /// Returns error if a transform name is unknown or an option is invalid
    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        Self::from_config_with_registry(config, &TransformRegistry::with_defaults())
    }

    /// Build from configuration using a caller-supplied registry
    ///
    /// The configured transform options are kept on the pipeline; start the
    /// run context from [`Pipeline::context`] so they apply.
    ///
    /// # Errors
    /// Returns error if a transform name is unknown or an option is invalid
    pub fn from_config_with_registry(
        config: &PipelineConfig,
        registry: &TransformRegistry,
    ) -> Result<Self, ConfigError> {
        config.validate(registry)?;
        let transforms = registry.resolve(config.transforms.as_slice())?;
        Ok(Self {
            transforms,
            limits: config.limits,
            options: config.transform_options()?,
        })
    }

    /// Transforms in run order
    #[inline]
    #[must_use]
    pub fn transforms(&self) -> &[TransformDescriptor] {
        &self.transforms
    }

    /// Names of transforms in run order
    #[must_use]
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(Transform::name).collect()
    }

    /// Document limits
    #[inline]
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Options the pipeline was configured with
    #[inline]
    #[must_use]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Empty run context carrying the configured options
    #[must_use]
    pub fn context(&self) -> TransformContext {
        TransformContext::new().with_options(self.options.clone())
    }

    /// Run every transform over `document`
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidDocument`] if the document breaks the
    /// limits; no transform runs in that case. Transform failures are
    /// reported in the returned [`PipelineReport`].
    pub fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<PipelineReport, PipelineError> {
        let span = tracing::info_span!("pipeline", transforms = self.transforms.len());
        let _enter = span.enter();

        let stats = validate(document, &self.limits).map_err(|err| {
            tracing::error!(error = %err, "document rejected");
            PipelineError::from(err)
        })?;

        let mut report = PipelineReport::new(stats);
        for transform in &self.transforms {
            let name = transform.name().to_string();
            let _transform_span = tracing::debug_span!("transform", name = %name).entered();

            match run_isolated(transform, document, context) {
                Ok(artifacts) => {
                    tracing::debug!(transform = %name, artifacts = artifacts.len(), "transform succeeded");
                    report.record_success(name, artifacts);
                }
                Err(error) => {
                    tracing::warn!(transform = %name, error = %error, "transform failed");
                    report.record_failure(name, error);
                }
            }
        }

        tracing::info!(
            artifacts = report.artifacts.len(),
            failures = report.failures.len(),
            "pipeline complete"
        );
        Ok(report)
    }
}

/// Run one transform, turning a panic into [`TransformError::Panicked`]
fn run_isolated(
    transform: &dyn Transform,
    document: &SchemaDocument,
    context: &TransformContext,
) -> Result<Vec<FileArtifact>, TransformError> {
    panic::catch_unwind(AssertUnwindSafe(|| transform.run(document, context)))
        .unwrap_or_else(|payload| Err(TransformError::Panicked(panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Builder for [`Pipeline`]
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    transforms: Vec<TransformDescriptor>,
    limits: Limits,
    options: TransformOptions,
}

impl PipelineBuilder {
    /// Append a descriptor
    #[must_use]
    pub fn transform(mut self, descriptor: TransformDescriptor) -> Self {
        self.transforms.push(descriptor);
        self
    }

    /// Append a custom transform
    #[must_use]
    pub fn custom(self, transform: impl Transform + 'static) -> Self {
        self.transform(TransformDescriptor::custom(transform))
    }

    /// Set document limits
    #[inline]
    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set transform options handed out by [`Pipeline::context`]
    #[inline]
    #[must_use]
    pub fn options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Finish
    #[must_use]
    pub fn build(self) -> Pipeline {
        Pipeline {
            transforms: self.transforms,
            limits: self.limits,
            options: self.options,
        }
    }
}
