//! Schema nodes
//!
//! [`SchemaNode`] is one component in a page tree. Deserialization is
//! lenient: a node without `componentName` or `props` still loads, and
//! `children` entries that are not objects (text content, numbers) are
//! dropped so the rest of the tree stays traversable.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A node in the page document tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Tag identifying the node kind (e.g. `Icon`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    /// Node properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,

    /// Child nodes in document order
    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<SchemaNode>,
}

/// Outcome of a typed string prop lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropLookup<'a> {
    /// Prop exists and is a string
    Present(&'a str),
    /// Node has no props, or no such key
    Missing,
    /// Prop exists but is not a string
    NotAString,
}

impl<'a> PropLookup<'a> {
    /// The string value, if present
    #[inline]
    #[must_use]
    pub fn present(self) -> Option<&'a str> {
        match self {
            Self::Present(s) => Some(s),
            Self::Missing | Self::NotAString => None,
        }
    }
}

impl SchemaNode {
    /// Create a node with the given component name and no props
    #[must_use]
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: Some(component_name.into()),
            props: None,
            children: Vec::new(),
        }
    }

    /// Set a prop
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Append a child
    #[must_use]
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SchemaNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Component name, if present
    #[inline]
    #[must_use]
    pub fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }

    /// Whether this node has the given component name
    #[inline]
    #[must_use]
    pub fn is_component(&self, name: &str) -> bool {
        self.component_name() == Some(name)
    }

    /// Raw prop value
    #[inline]
    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.as_ref()?.get(key)
    }

    /// Typed string prop lookup
    #[must_use]
    pub fn prop_str(&self, key: &str) -> PropLookup<'_> {
        match self.prop(key) {
            None => PropLookup::Missing,
            Some(Value::String(s)) => PropLookup::Present(s),
            Some(_) => PropLookup::NotAString,
        }
    }

    /// Child nodes
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }
}

/// `children` may be an array of nodes, a text string, or absent
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<SchemaNode>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ChildrenVisitor;

    impl<'de> Visitor<'de> for ChildrenVisitor {
        type Value = Vec<SchemaNode>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an array of schema nodes")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut nodes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(MaybeNode(node)) = seq.next_element()? {
                nodes.extend(node);
            }
            Ok(nodes)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(ChildrenVisitor)
}

/// Array element that is kept only when it is an object
struct MaybeNode(Option<SchemaNode>);

impl<'de> Deserialize<'de> for MaybeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MaybeNodeVisitor;

        impl<'de> Visitor<'de> for MaybeNodeVisitor {
            type Value = MaybeNode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a schema node")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                SchemaNode::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(|node| MaybeNode(Some(node)))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(MaybeNode(None))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(MaybeNode(None))
            }
        }

        deserializer.deserialize_any(MaybeNodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_fields() {
        let node: SchemaNode = serde_json::from_value(json!({
            "componentName": "Icon",
            "props": { "name": "mdi:home" },
            "children": []
        }))
        .unwrap();
        assert!(node.is_component("Icon"));
        assert_eq!(node.prop_str("name"), PropLookup::Present("mdi:home"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn missing_fields_load_as_absent() {
        let node: SchemaNode = serde_json::from_value(json!({})).unwrap();
        assert_eq!(node.component_name(), None);
        assert_eq!(node.prop_str("name"), PropLookup::Missing);
    }

    #[test]
    fn text_children_are_dropped() {
        let node: SchemaNode = serde_json::from_value(json!({
            "componentName": "Text",
            "children": "hello"
        }))
        .unwrap();
        assert!(node.children().is_empty());

        let mixed: SchemaNode = serde_json::from_value(json!({
            "componentName": "div",
            "children": ["text", { "componentName": "Icon" }, 3, null, [1, 2]]
        }))
        .unwrap();
        assert_eq!(mixed.children().len(), 1);
        assert!(mixed.children()[0].is_component("Icon"));
    }

    #[test]
    fn prop_str_distinguishes_non_strings() {
        let node = SchemaNode::new("Icon").with_prop("name", 42);
        assert_eq!(node.prop_str("name"), PropLookup::NotAString);
        assert_eq!(node.prop_str("name").present(), None);
    }

    #[test]
    fn serialize_omits_empty_fields() {
        let node = SchemaNode::new("Icon");
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "componentName": "Icon" })
        );
    }

    #[test]
    fn yaml_children_are_lenient() {
        let yaml = "componentName: div\nchildren:\n  - componentName: Icon\n    props:\n      name: mdi:home\n  - plain text\n";
        let node: SchemaNode = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].prop_str("name").present(), Some("mdi:home"));
    }
}
