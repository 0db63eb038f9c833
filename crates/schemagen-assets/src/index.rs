//! First-occurrence dedup index
//!
//! Provides [`AssetIndex`] and [`collect_unique_refs`], which walk a schema
//! document and keep the first node referencing each distinct raw name.
//!
//! Dedup is on the raw prop string, before any namespace parsing: `mdi:home`
//! and `mdi:home:alt` are two entries even though both resolve to the same
//! [`AssetKey`](crate::AssetKey).

use indexmap::map::Entry;
use indexmap::IndexMap;
use schemagen_schema::{PropLookup, SchemaDocument, SchemaNode};

/// Insertion-ordered map where the first insert of a key wins
#[derive(Debug, Clone)]
pub struct AssetIndex<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for AssetIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AssetIndex<V> {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert unless `raw` is already present
    ///
    /// Returns `true` if the entry was inserted. An existing entry is never
    /// replaced.
    pub fn insert_first(&mut self, raw: impl Into<String>, value: V) -> bool {
        match self.entries.entry(raw.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Check if raw name is present
    #[inline]
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.entries.contains_key(raw)
    }

    /// Value stored for a raw name
    #[inline]
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&V> {
        self.entries.get(raw)
    }

    /// Number of distinct raw names
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if index is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Raw names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Result of scanning a document for references
#[derive(Debug, Clone)]
pub struct RefScan<'a> {
    /// First node per distinct raw name, in document order
    pub index: AssetIndex<&'a SchemaNode>,
    /// Matching nodes seen in total (including duplicates)
    pub matched: usize,
    /// Matching nodes without a usable string prop
    pub skipped_malformed: usize,
}

/// Scan `document` for nodes named `component` and index them by the string
/// value of `prop`
///
/// Nodes without props, without the prop, or with a non-string value are
/// counted in `skipped_malformed` and otherwise ignored.
#[must_use]
pub fn collect_unique_refs<'a>(
    document: &'a SchemaDocument,
    component: &str,
    prop: &str,
) -> RefScan<'a> {
    let mut scan = RefScan {
        index: AssetIndex::new(),
        matched: 0,
        skipped_malformed: 0,
    };

    document.traverse(|node| {
        if !node.is_component(component) {
            return;
        }
        scan.matched += 1;
        match node.prop_str(prop) {
            PropLookup::Present(raw) => {
                scan.index.insert_first(raw, node);
            }
            PropLookup::Missing | PropLookup::NotAString => {
                scan.skipped_malformed += 1;
            }
        }
    });

    tracing::trace!(
        component,
        matched = scan.matched,
        unique = scan.index.len(),
        skipped = scan.skipped_malformed,
        "reference scan complete"
    );
    scan
}
