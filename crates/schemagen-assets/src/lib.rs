//! schemagen Assets
//!
//! Namespaced asset references and their resolution.
//!
//! # Core Concepts
//!
//! - [`AssetKey`]: `collection:item` identifier parsed from a raw prop
//! - [`AssetIndex`]: First-occurrence, insertion-ordered dedup map
//! - [`collect_unique_refs`]: Scan a document for distinct raw references
//! - [`ResourceMap`] / [`IconResource`]: Caller-supplied icon content
//! - [`parse_iconify`]: Load an iconify collection into a [`ResourceMap`]
//! - [`render_svg`]: Standalone SVG file for a resolved icon

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod iconify;
mod index;
mod key;
mod resource;
mod svg;

pub use error::AssetError;
pub use iconify::parse_iconify;
pub use index::{collect_unique_refs, AssetIndex, RefScan};
pub use key::{AssetKey, KeyParse, DELIMITER};
pub use resource::{IconResource, ResourceMap, DEFAULT_ICON_SIZE};
pub use svg::render_svg;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
