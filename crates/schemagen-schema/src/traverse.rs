//! Pre-order traversal
//!
//! Every traversal visits a node before its children and children in
//! document order. Iteration uses an explicit stack, so deep trees do not
//! grow the call stack.

use crate::node::SchemaNode;

/// Pre-order iterator over a subtree
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(&'a SchemaNode, usize)>,
}

impl<'a> Walk<'a> {
    /// Start a walk at `root` (depth 0)
    #[must_use]
    pub fn new(root: &'a SchemaNode) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }

    /// Yield `(node, depth)` pairs instead of nodes
    #[inline]
    #[must_use]
    pub fn with_depth(self) -> WalkWithDepth<'a> {
        WalkWithDepth(self)
    }

    fn next_entry(&mut self) -> Option<(&'a SchemaNode, usize)> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SchemaNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().map(|(node, _)| node)
    }
}

/// Pre-order iterator yielding each node with its depth
#[derive(Debug, Clone)]
pub struct WalkWithDepth<'a>(Walk<'a>);

impl<'a> Iterator for WalkWithDepth<'a> {
    type Item = (&'a SchemaNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_entry()
    }
}

impl SchemaNode {
    /// Pre-order iterator over this subtree, starting with `self`
    #[inline]
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }
}

/// Call `visitor` for every node of the subtree in pre-order
pub fn traverse<'a, F>(root: &'a SchemaNode, mut visitor: F)
where
    F: FnMut(&'a SchemaNode),
{
    for node in root.walk() {
        visitor(node);
    }
}

/// Nodes matching `predicate`, in document order
///
/// Structurally identical nodes are all returned; nothing is deduplicated.
#[must_use]
pub fn collect_nodes_where<'a, P>(root: &'a SchemaNode, mut predicate: P) -> Vec<&'a SchemaNode>
where
    P: FnMut(&SchemaNode) -> bool,
{
    let mut matches = Vec::new();
    traverse(root, |node| {
        if predicate(node) {
            matches.push(node);
        }
    });
    matches
}
