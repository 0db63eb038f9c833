//! schemagen Transforms
//!
//! Generation steps run by the pipeline.
//!
//! # Core Concepts
//!
//! - [`Transform`]: Named, pure step from a document to artifacts
//! - [`TransformContext`]: Resource maps and options shared by all steps
//! - [`IconAssets`]: One SVG file per distinct icon reference
//! - [`ComponentDependencies`]: `dependencies.json` from the component map
//! - [`TransformDescriptor`] / [`TransformRegistry`]: Selecting steps by name
//!
//! # Example
//!
//! ```rust
//! use schemagen_assets::{IconResource, ResourceMap};
//! use schemagen_schema::{SchemaDocument, SchemaNode};
//! use schemagen_transform::{IconAssets, Transform, TransformContext};
//!
//! let mut icons = ResourceMap::new();
//! icons.insert("mdi:home", IconResource::new(24.0, 24.0, "<path/>").unwrap());
//! let context = TransformContext::new().with_icons(icons);
//!
//! let doc = SchemaDocument::single(SchemaNode::new("Icon").with_prop("name", "mdi:home"));
//! let artifacts = IconAssets.run(&doc, &context).unwrap();
//! assert_eq!(artifacts[0].full_path(), "./src/assets/icons/mdi/home.svg");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod components;
mod context;
mod dependencies;
mod descriptor;
mod error;
mod icons;
mod registry;
mod transform;

pub use components::{ComponentEntry, ComponentMap};
pub use context::{
    TransformContext, TransformOptions, DEFAULT_DEPENDENCIES_PATH, DEFAULT_ICONS_ROOT,
    DEFAULT_ICON_COMPONENT, DEFAULT_ICON_NAME_PROP,
};
pub use dependencies::{ComponentDependencies, COMPONENT_DEPENDENCIES_NAME, MANIFEST_FILE_NAME};
pub use descriptor::TransformDescriptor;
pub use error::TransformError;
pub use icons::{IconAssets, IconStats, ICON_ASSETS_NAME};
pub use registry::TransformRegistry;
pub use transform::{FnTransform, Transform};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
