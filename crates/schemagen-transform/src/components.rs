//! Component package map
//!
//! [`ComponentMap`] tells the dependency transform which package provides a
//! component. Serialized as `componentName → {package, version, exportName?}`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package information for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    /// npm-style package name
    pub package: String,
    /// Version requirement written to the manifest
    pub version: String,
    /// Exported symbol when it differs from the component name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
}

impl ComponentEntry {
    /// Create entry without an export name
    #[must_use]
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
            export_name: None,
        }
    }

    /// Set export name
    #[inline]
    #[must_use]
    pub fn with_export_name(mut self, export_name: impl Into<String>) -> Self {
        self.export_name = Some(export_name.into());
        self
    }
}

/// Lookup from component name to its package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentMap {
    entries: IndexMap<String, ComponentEntry>,
}

impl ComponentMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON component map
    ///
    /// # Errors
    /// Returns error on malformed JSON or an entry missing `package`/`version`
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, component: impl Into<String>, entry: ComponentEntry) {
        self.entries.insert(component.into(), entry);
    }

    /// Add an entry, returning the map
    #[must_use]
    pub fn with(mut self, component: impl Into<String>, entry: ComponentEntry) -> Self {
        self.insert(component, entry);
        self
    }

    /// Entry for a component name
    #[inline]
    #[must_use]
    pub fn get(&self, component: &str) -> Option<&ComponentEntry> {
        self.entries.get(component)
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
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
