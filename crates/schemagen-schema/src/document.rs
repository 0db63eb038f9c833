//! Schema documents
//!
//! A [`SchemaDocument`] is the unit handed to the pipeline: an ordered list of
//! page roots. Three serialized shapes are accepted:
//!
//! - a single node object (`{"componentName": "Page", ...}`)
//! - an array of nodes (`[{...}, {...}]`)
//! - an envelope (`{"pageSchema": [...], "iconsMap": {...}}`); other
//!   top-level keys are kept as embedded attachments

use crate::error::SchemaError;
use crate::node::SchemaNode;
use crate::traverse::Walk;
use serde_json::{Map, Value};

const PAGES_KEY: &str = "pageSchema";

/// An ordered forest of page trees
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDocument {
    pages: Vec<SchemaNode>,
    embedded: Map<String, Value>,
}

impl SchemaDocument {
    /// Document with the given pages
    #[must_use]
    pub fn new(pages: Vec<SchemaNode>) -> Self {
        Self {
            pages,
            embedded: Map::new(),
        }
    }

    /// Document with a single page
    #[must_use]
    pub fn single(page: SchemaNode) -> Self {
        Self::new(vec![page])
    }

    /// Parse a JSON document
    ///
    /// # Errors
    /// Returns error on malformed JSON or an unsupported top-level shape
    pub fn from_json_str(input: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Parse a YAML document
    ///
    /// # Errors
    /// Returns error on malformed YAML or an unsupported top-level shape
    pub fn from_yaml_str(input: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_yaml::from_str(input)?;
        Self::from_value(value)
    }

    /// Build from an already parsed value
    ///
    /// # Errors
    /// Returns error if the value is not a node, an array of nodes or a
    /// `pageSchema` envelope
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        match value {
            Value::Array(_) => Ok(Self::new(serde_json::from_value(value)?)),
            Value::Object(mut map) => match map.remove(PAGES_KEY) {
                Some(pages @ Value::Array(_)) => Ok(Self {
                    pages: serde_json::from_value(pages)?,
                    embedded: map,
                }),
                Some(other) => Err(SchemaError::invalid_shape(format!(
                    "'{PAGES_KEY}' must be an array, found {}",
                    kind_of(&other)
                ))),
                None => Ok(Self::single(serde_json::from_value(Value::Object(map))?)),
            },
            other => Err(SchemaError::invalid_shape(format!(
                "expected an object or an array, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Page roots in order
    #[inline]
    #[must_use]
    pub fn pages(&self) -> &[SchemaNode] {
        &self.pages
    }

    /// Embedded top-level attachment of an envelope (e.g. `iconsMap`)
    #[inline]
    #[must_use]
    pub fn embedded(&self, key: &str) -> Option<&Value> {
        self.embedded.get(key)
    }

    /// Attach a top-level value
    #[must_use]
    pub fn with_embedded(mut self, key: impl Into<String>, value: Value) -> Self {
        self.embedded.insert(key.into(), value);
        self
    }

    /// Pre-order iterator over every page in order
    pub fn walk(&self) -> impl Iterator<Item = &SchemaNode> {
        self.pages.iter().flat_map(Walk::new)
    }

    /// Call `visitor` for every node of every page in pre-order
    pub fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a SchemaNode),
    {
        for page in &self.pages {
            crate::traverse::traverse(page, &mut visitor);
        }
    }

    /// Nodes matching `predicate` across all pages, in document order
    #[must_use]
    pub fn collect_nodes_where<P>(&self, mut predicate: P) -> Vec<&SchemaNode>
    where
        P: FnMut(&SchemaNode) -> bool,
    {
        self.walk().filter(|&node| predicate(node)).collect()
    }

    /// Whether the document has no pages
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl From<SchemaNode> for SchemaDocument {
    fn from(page: SchemaNode) -> Self {
        Self::single(page)
    }
}

impl FromIterator<SchemaNode> for SchemaDocument {
    fn from_iter<I: IntoIterator<Item = SchemaNode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_single_node() {
        let doc = SchemaDocument::from_json_str(r#"{"componentName":"Page"}"#).unwrap();
        assert_eq!(doc.pages().len(), 1);
        assert!(doc.pages()[0].is_component("Page"));
    }

    #[test]
    fn parses_page_array() {
        let doc =
            SchemaDocument::from_json_str(r#"[{"componentName":"A"},{"componentName":"B"}]"#)
                .unwrap();
        let names: Vec<_> = doc.walk().filter_map(SchemaNode::component_name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn parses_envelope_and_keeps_attachments() {
        let doc = SchemaDocument::from_value(json!({
            "pageSchema": [{ "componentName": "Page" }],
            "iconsMap": { "mdi:home": { "width": 24, "height": 24, "body": "<path/>" } }
        }))
        .unwrap();
        assert_eq!(doc.pages().len(), 1);
        assert!(doc.embedded("iconsMap").is_some());
        assert!(doc.embedded("pageSchema").is_none());
    }

    #[test]
    fn rejects_scalar_document() {
        let err = SchemaDocument::from_json_str("42").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidShape(_)));
    }

    #[test]
    fn rejects_non_array_page_schema() {
        let err = SchemaDocument::from_value(json!({ "pageSchema": {} })).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SchemaDocument::from_json_str("{").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn traverse_spans_pages_in_order() {
        let doc: SchemaDocument = [
            SchemaNode::new("p1").with_child(SchemaNode::new("x")),
            SchemaNode::new("p2"),
        ]
        .into_iter()
        .collect();
        let mut seen = Vec::new();
        doc.traverse(|n| seen.push(n.component_name().unwrap_or_default()));
        assert_eq!(seen, ["p1", "x", "p2"]);
    }
}
