//! Icon asset transform
//!
//! Writes one SVG file per distinct icon referenced by the document.
//!
//! # Algorithm
//!
//! 1. Scan for the icon component, dedup by raw `name` (first wins)
//! 2. Parse each raw name as `collection:item`; skip names that are not
//! 3. Resolve against the resource map; a miss emits nothing
//! 4. Emit `<icons_root>/<collection>/<item>.svg`

use crate::context::TransformContext;
use crate::error::TransformError;
use crate::transform::Transform;
use schemagen_artifact::{ArtifactError, FileArtifact};
use schemagen_assets::{collect_unique_refs, render_svg, AssetKey, KeyParse};
use schemagen_schema::SchemaDocument;

/// Registered name of [`IconAssets`]
pub const ICON_ASSETS_NAME: &str = "importIconsFile";

const DESCRIPTION: &str = "write icon asset files";
const SVG: &str = "svg";

/// Icon asset transform
#[derive(Debug, Clone, Copy, Default)]
pub struct IconAssets;

/// Counters of one icon run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconStats {
    /// Icon nodes visited, duplicates included
    pub matched: usize,
    /// Distinct raw names
    pub unique: usize,
    /// Icon nodes without a string name
    pub skipped_malformed: usize,
    /// Distinct names without a usable `collection:item` form
    pub skipped_unnamespaced: usize,
    /// Names that parse but cannot be written as a file
    pub skipped_invalid: usize,
    /// Keys absent from the resource map
    pub misses: usize,
    /// Artifacts emitted
    pub emitted: usize,
}

impl IconAssets {
    /// Create transform
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run and return counters alongside the artifacts
    #[must_use]
    pub fn generate(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> (Vec<FileArtifact>, IconStats) {
        let options = context.options();
        let scan = collect_unique_refs(document, &options.icon_component, &options.icon_name_prop);
        let mut stats = IconStats {
            matched: scan.matched,
            unique: scan.index.len(),
            skipped_malformed: scan.skipped_malformed,
            ..IconStats::default()
        };

        let mut artifacts = Vec::with_capacity(scan.index.len());
        for raw in scan.index.names() {
            let key = match AssetKey::parse(raw) {
                KeyParse::Namespaced(key) => key,
                KeyParse::NotNamespaced | KeyParse::EmptyPart => {
                    stats.skipped_unnamespaced += 1;
                    continue;
                }
            };
            let Some(resource) = context.icons().get(&key) else {
                tracing::debug!(icon = %key, "icon not found in resource map");
                stats.misses += 1;
                continue;
            };

            let artifact = options
                .icons_root
                .child(key.collection())
                .map_err(ArtifactError::from)
                .and_then(|dir| {
                    FileArtifact::new(SVG, format!("{}.svg", key.item()), dir, render_svg(resource))
                });
            match artifact {
                Ok(artifact) => artifacts.push(artifact),
                Err(err) => {
                    tracing::warn!(icon = raw, error = %err, "skipping icon with unusable name");
                    stats.skipped_invalid += 1;
                }
            }
        }

        stats.emitted = artifacts.len();
        (artifacts, stats)
    }
}

impl Transform for IconAssets {
    fn name(&self) -> &str {
        ICON_ASSETS_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<Vec<FileArtifact>, TransformError> {
        let (artifacts, stats) = self.generate(document, context);
        tracing::debug!(
            matched = stats.matched,
            unique = stats.unique,
            malformed = stats.skipped_malformed,
            unnamespaced = stats.skipped_unnamespaced,
            invalid = stats.skipped_invalid,
            misses = stats.misses,
            emitted = stats.emitted,
            "icon assets generated"
        );
        Ok(artifacts)
    }
}
