//! Iconify collection loader
//!
//! Converts an iconify JSON collection into [`ResourceMap`] entries keyed by
//! `prefix:name`. Per-icon dimensions fall back to the collection's, then to
//! [`DEFAULT_ICON_SIZE`]. Aliases resolve to their parent icon and may
//! override its dimensions.

use crate::error::AssetError;
use crate::resource::{IconResource, ResourceMap, DEFAULT_ICON_SIZE};
use indexmap::IndexMap;
use serde::Deserialize;

/// Longest alias chain followed before giving up
const MAX_ALIAS_HOPS: usize = 16;

#[derive(Debug, Deserialize)]
struct IconifyCollection {
    prefix: String,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    icons: IndexMap<String, IconifyIcon>,
    #[serde(default)]
    aliases: IndexMap<String, IconifyAlias>,
}

#[derive(Debug, Deserialize)]
struct IconifyIcon {
    body: String,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct IconifyAlias {
    parent: String,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

/// Parse an iconify collection into a resource map
///
/// # Errors
/// Returns error on malformed JSON or an invalid prefix; icons with unusable
/// dimensions are logged and skipped
pub fn parse_iconify(input: &str) -> Result<ResourceMap, AssetError> {
    let collection: IconifyCollection = serde_json::from_str(input)?;
    if collection.prefix.is_empty() || collection.prefix.contains(crate::key::DELIMITER) {
        return Err(AssetError::Iconify(format!(
            "invalid prefix '{}'",
            collection.prefix
        )));
    }

    let default_width = collection.width.unwrap_or(DEFAULT_ICON_SIZE);
    let default_height = collection.height.unwrap_or(DEFAULT_ICON_SIZE);
    let mut map = ResourceMap::new();

    for (name, icon) in &collection.icons {
        let key = format!("{}:{name}", collection.prefix);
        match IconResource::new(
            icon.width.unwrap_or(default_width),
            icon.height.unwrap_or(default_height),
            icon.body.clone(),
        ) {
            Ok(resource) => map.insert(key, resource),
            Err(err) => {
                tracing::warn!(error = %err.for_key(key), "skipping invalid iconify icon");
            }
        }
    }

    for (name, alias) in &collection.aliases {
        let Some(parent) = resolve_alias(&collection, &alias.parent) else {
            tracing::warn!(
                prefix = %collection.prefix,
                alias = %name,
                parent = %alias.parent,
                "skipping unresolvable iconify alias"
            );
            continue;
        };
        let key = format!("{}:{name}", collection.prefix);
        let resource = IconResource::new(
            alias
                .width
                .or(parent.width)
                .unwrap_or(default_width),
            alias
                .height
                .or(parent.height)
                .unwrap_or(default_height),
            parent.body.clone(),
        );
        match resource {
            Ok(resource) => map.insert(key, resource),
            Err(err) => {
                tracing::warn!(error = %err.for_key(key), "skipping invalid iconify alias");
            }
        }
    }

    tracing::debug!(
        prefix = %collection.prefix,
        icons = collection.icons.len(),
        aliases = collection.aliases.len(),
        "loaded iconify collection"
    );
    Ok(map)
}

/// Follow an alias chain to a concrete icon
fn resolve_alias<'a>(collection: &'a IconifyCollection, start: &str) -> Option<&'a IconifyIcon> {
    let mut current = start;
    for _ in 0..MAX_ALIAS_HOPS {
        if let Some(icon) = collection.icons.get(current) {
            return Some(icon);
        }
        current = &collection.aliases.get(current)?.parent;
    }
    None
}
