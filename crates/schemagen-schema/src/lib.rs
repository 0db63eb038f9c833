//! schemagen Schema Tree
//!
//! Read-only representation of a page document and its traversal primitives.
//!
//! # Core Concepts
//!
//! - [`SchemaNode`]: `componentName` + `props` + ordered `children`
//! - [`SchemaDocument`]: Ordered forest of page roots
//! - [`traverse`] / [`collect_nodes_where`]: Pre-order visitation
//! - [`validate`]: Depth and size limits checked before generation
//!
//! # Example
//!
//! ```rust
//! use schemagen_schema::{collect_nodes_where, SchemaNode};
//!
//! let page = SchemaNode::new("Page")
//!     .with_child(SchemaNode::new("Icon").with_prop("name", "mdi:home"));
//! let icons = collect_nodes_where(&page, |n| n.is_component("Icon"));
//! assert_eq!(icons.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod document;
mod error;
mod node;
mod traverse;
mod validate;

pub use document::SchemaDocument;
pub use error::SchemaError;
pub use node::{PropLookup, SchemaNode};
pub use traverse::{collect_nodes_where, traverse, Walk, WalkWithDepth};
pub use validate::{validate, DocumentStats, Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
