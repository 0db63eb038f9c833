//! schemagen Pipeline
//!
//! Runs an ordered list of transforms over a schema document and persists
//! the results.
//!
//! # Core Concepts
//!
//! - [`Pipeline`]: Validates once, runs transforms in order, isolates failures
//! - [`PipelineReport`]: Artifacts, per-transform outcomes and failures
//! - [`PipelineConfig`]: TOML configuration
//! - [`ArtifactSink`]: [`MemorySink`] for tests, [`FsSink`] for disk
//!
//! # Example
//!
//! ```rust
//! use schemagen_pipeline::{ArtifactSink, MemorySink, Pipeline};
//! use schemagen_schema::{SchemaDocument, SchemaNode};
//! use schemagen_transform::TransformContext;
//!
//! let doc = SchemaDocument::single(SchemaNode::new("Page"));
//! let report = Pipeline::default().run(&doc, &TransformContext::new()).unwrap();
//! assert!(report.is_success());
//!
//! let mut sink = MemorySink::new();
//! sink.write_all(&report.artifacts).unwrap();
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod pipeline;
mod report;
mod sink;

pub use config::PipelineConfig;
pub use error::{ConfigError, PipelineError, SinkError};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use report::{
    FailureSummary, PipelineReport, ReportSummary, TransformFailure, TransformOutcome,
    TransformStatus,
};
pub use sink::{ArtifactSink, FsSink, MemorySink, SinkSummary, WriteOutcome};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
