//! Icon resources
//!
//! [`ResourceMap`] maps `collection:item` lookup strings to resolved
//! [`IconResource`] content. It is supplied by the caller and only queried by
//! transforms.

use crate::error::AssetError;
use crate::key::AssetKey;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default icon box edge when a source omits width or height
pub const DEFAULT_ICON_SIZE: f64 = 16.0;

/// Resolved icon content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIconResource")]
pub struct IconResource {
    width: f64,
    height: f64,
    body: String,
}

#[derive(Deserialize)]
struct RawIconResource {
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    body: String,
}

impl TryFrom<RawIconResource> for IconResource {
    type Error = AssetError;

    fn try_from(raw: RawIconResource) -> Result<Self, Self::Error> {
        Self::new(
            raw.width.unwrap_or(DEFAULT_ICON_SIZE),
            raw.height.unwrap_or(DEFAULT_ICON_SIZE),
            raw.body,
        )
    }
}

impl IconResource {
    /// Create a resource
    ///
    /// # Errors
    /// Returns error if width or height is not a finite, positive number
    pub fn new(width: f64, height: f64, body: impl Into<String>) -> Result<Self, AssetError> {
        for (label, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AssetError::InvalidDimension {
                    dimension: label,
                    value,
                });
            }
        }
        Ok(Self {
            width,
            height,
            body: body.into(),
        })
    }

    /// Box width
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Box height
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Inner SVG markup
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Lookup table from `collection:item` to icon content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceMap {
    entries: IndexMap<String, IconResource>,
}

impl ResourceMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `"collection:item" → {width, height, body}`
    ///
    /// # Errors
    /// Returns error on malformed JSON or an invalid entry
    pub fn from_json_str(input: &str) -> Result<Self, AssetError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Build from an already parsed JSON object
    ///
    /// Invalid entries are logged and skipped.
    ///
    /// # Errors
    /// Returns error if the value is not an object
    pub fn from_value(value: Value) -> Result<Self, AssetError> {
        let Value::Object(map) = value else {
            return Err(AssetError::invalid_resource(
                "<root>",
                "resource map must be a JSON object",
            ));
        };

        let mut entries = IndexMap::with_capacity(map.len());
        for (key, entry) in map {
            match parse_entry(&key, entry) {
                Ok(resource) => {
                    entries.insert(key, resource);
                }
                Err(err) => tracing::warn!(error = %err, "skipping invalid icon resource"),
            }
        }
        Ok(Self { entries })
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, resource: IconResource) {
        self.entries.insert(key.into(), resource);
    }

    /// Add every entry of `other`, replacing existing keys
    pub fn extend(&mut self, other: ResourceMap) {
        self.entries.extend(other.entries);
    }

    /// Resolve a namespaced key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &AssetKey) -> Option<&IconResource> {
        self.entries.get(&key.lookup_key())
    }

    /// Resolve a raw lookup string
    #[inline]
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&IconResource> {
        self.entries.get(key)
    }

    /// Check if key exists
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &AssetKey) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if map is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconResource)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn parse_entry(key: &str, entry: Value) -> Result<IconResource, AssetError> {
    let raw: RawIconResource = serde_json::from_value(entry)
        .map_err(|e| AssetError::invalid_resource(key, e.to_string()))?;
    IconResource::try_from(raw).map_err(|e| e.for_key(key))
}

impl FromIterator<(String, IconResource)> for ResourceMap {
    fn from_iter<I: IntoIterator<Item = (String, IconResource)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
