//! Structural validation
//!
//! Checks a document against traversal limits before any transform sees it.

use crate::document::SchemaDocument;
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

/// Default deepest node depth
///
/// `serde_json` and `serde_yaml` stop at 128 nested containers and every
/// component level costs two (the node object and its `children` array), so
/// parsing caps usable depth near 60; this leaves room for nested props.
pub const DEFAULT_MAX_DEPTH: usize = 48;

/// Default node count across all pages
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Traversal limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Deepest allowed node (page roots have depth 0)
    pub max_depth: usize,
    /// Maximum total node count across all pages
    pub max_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl Limits {
    /// With max depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With max node count
    #[inline]
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

/// Shape summary of a validated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocumentStats {
    pub pages: usize,
    pub nodes: usize,
    pub max_depth: usize,
}

/// Validate `document` against `limits`
///
/// # Errors
/// Returns [`SchemaError::TooDeep`] or [`SchemaError::TooManyNodes`] at the
/// first node that breaks a limit
pub fn validate(document: &SchemaDocument, limits: &Limits) -> Result<DocumentStats, SchemaError> {
    let mut stats = DocumentStats {
        pages: document.pages().len(),
        ..DocumentStats::default()
    };

    for page in document.pages() {
        for (_, depth) in page.walk().with_depth() {
            if depth > limits.max_depth {
                return Err(SchemaError::TooDeep {
                    depth,
                    limit: limits.max_depth,
                });
            }
            stats.nodes += 1;
            if stats.nodes > limits.max_nodes {
                return Err(SchemaError::TooManyNodes {
                    limit: limits.max_nodes,
                });
            }
            stats.max_depth = stats.max_depth.max(depth);
        }
    }

    tracing::debug!(
        pages = stats.pages,
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        "document validated"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SchemaNode;

    fn chain(depth: usize) -> SchemaNode {
        let mut node = SchemaNode::new("leaf");
        for _ in 0..depth {
            node = SchemaNode::new("box").with_child(node);
        }
        node
    }

    #[test]
    fn counts_nodes_and_depth() {
        let doc = SchemaDocument::new(vec![chain(3), SchemaNode::new("p2")]);
        let stats = validate(&doc, &Limits::default()).unwrap();
        assert_eq!(
            stats,
            DocumentStats {
                pages: 2,
                nodes: 5,
                max_depth: 3
            }
        );
    }

    #[test]
    fn depth_at_limit_is_accepted() {
        let doc = SchemaDocument::single(chain(4));
        assert!(validate(&doc, &Limits::default().with_max_depth(4)).is_ok());
    }

    #[test]
    fn rejects_too_deep() {
        let doc = SchemaDocument::single(chain(5));
        let err = validate(&doc, &Limits::default().with_max_depth(4)).unwrap_err();
        assert!(matches!(err, SchemaError::TooDeep { depth: 5, limit: 4 }));
    }

    #[test]
    fn rejects_too_many_nodes() {
        let doc = SchemaDocument::single(chain(10));
        let err = validate(&doc, &Limits::default().with_max_nodes(3)).unwrap_err();
        assert!(matches!(err, SchemaError::TooManyNodes { limit: 3 }));
    }

    fn nested_page_json(depth: usize) -> String {
        let mut node = r#"{"componentName":"leaf","children":[]}"#.to_string();
        for _ in 0..depth {
            node = format!(
                r#"{{"componentName":"div","props":{{"style":{{"display":"flex"}}}},"children":[{node}]}}"#
            );
        }
        format!(r#"{{"pageSchema":[{node}]}}"#)
    }

    #[test]
    fn parsed_document_at_default_depth_validates() {
        let doc = SchemaDocument::from_json_str(&nested_page_json(DEFAULT_MAX_DEPTH)).unwrap();
        let stats = validate(&doc, &Limits::default()).unwrap();
        assert_eq!(stats.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn parsed_document_past_default_depth_is_too_deep() {
        let depth = DEFAULT_MAX_DEPTH + 1;
        let doc = SchemaDocument::from_json_str(&nested_page_json(depth)).unwrap();
        let err = validate(&doc, &Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::TooDeep { depth: d, limit: DEFAULT_MAX_DEPTH } if d == depth
        ));
    }

    #[test]
    fn empty_document_is_valid() {
        let stats = validate(&SchemaDocument::default(), &Limits::default()).unwrap();
        assert_eq!(stats.nodes, 0);
    }
}
