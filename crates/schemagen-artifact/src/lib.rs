//! schemagen Artifacts
//!
//! Records produced by the generation pipeline before they are materialized.
//!
//! # Core Concepts
//!
//! - [`FileArtifact`]: `(file type, file name, path, content)` record
//! - [`ArtifactKey`]: `(path, file name)` identity used by sinks
//! - [`ArtifactPath`]: Logical slash-separated directory
//! - [`ContentHash`]: 32-byte BLAKE3 fingerprint
//!
//! # Example
//!
//! ```rust
//! use schemagen_artifact::FileArtifact;
//!
//! let artifact = FileArtifact::at("svg", "home.svg", "./src/assets/icons/mdi", "<svg/>").unwrap();
//! assert_eq!(artifact.full_path(), "./src/assets/icons/mdi/home.svg");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod artifact;
mod hash;
mod path;

pub use artifact::{fingerprint_all, ArtifactError, ArtifactKey, FileArtifact};
pub use hash::{ContentHash, HashError};
pub use path::{Anchor, ArtifactPath, PathError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
