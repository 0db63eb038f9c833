//! Property tests for pre-order traversal.
//!
//! The iterative walker must agree with a straightforward recursive
//! definition of pre-order on arbitrary trees: every node exactly once,
//! parent before children, siblings in document order.

use proptest::prelude::*;
use schemagen_schema::{collect_nodes_where, traverse, validate, Limits, SchemaDocument, SchemaNode};

fn arb_node() -> impl Strategy<Value = SchemaNode> {
    let leaf = prop_oneof![Just("Icon"), Just("Text"), Just("div")]
        .prop_map(SchemaNode::new);
    leaf.prop_recursive(6, 64, 5, |inner| {
        (
            prop_oneof![Just("Icon"), Just("Text"), Just("div")],
            proptest::collection::vec(inner, 0..5),
        )
            .prop_map(|(name, children)| SchemaNode::new(name).with_children(children))
    })
}

fn recursive_pre_order<'a>(node: &'a SchemaNode, out: &mut Vec<&'a SchemaNode>) {
    out.push(node);
    for child in node.children() {
        recursive_pre_order(child, out);
    }
}

proptest! {
    #[test]
    fn walk_matches_recursive_pre_order(root in arb_node()) {
        let mut expected = Vec::new();
        recursive_pre_order(&root, &mut expected);

        let mut visited = Vec::new();
        traverse(&root, |node| visited.push(node));

        prop_assert_eq!(visited.len(), expected.len());
        for (a, b) in visited.iter().zip(&expected) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn collect_is_filtered_walk(root in arb_node()) {
        let icons = collect_nodes_where(&root, |n| n.is_component("Icon"));
        let expected: Vec<_> = root.walk().filter(|n| n.is_component("Icon")).collect();
        prop_assert_eq!(icons.len(), expected.len());
        prop_assert!(icons.iter().zip(&expected).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    #[test]
    fn validation_counts_every_node(pages in proptest::collection::vec(arb_node(), 0..4)) {
        let total: usize = pages.iter().map(|p| p.walk().count()).sum();
        let doc = SchemaDocument::new(pages);
        let stats = validate(&doc, &Limits::default()).unwrap();
        prop_assert_eq!(stats.nodes, total);
        prop_assert_eq!(doc.walk().count(), total);
    }

    #[test]
    fn traversal_is_repeatable(root in arb_node()) {
        let first: Vec<_> = root.walk().map(|n| n.component_name().map(str::to_owned)).collect();
        let second: Vec<_> = root.walk().map(|n| n.component_name().map(str::to_owned)).collect();
        prop_assert_eq!(first, second);
    }
}
