//! Property tests for first-occurrence dedup.
//!
//! For any sequence of raw icon names spread over a page, the scan must
//! yield each distinct name once, in the order it first appeared.

use proptest::prelude::*;
use schemagen_assets::{collect_unique_refs, AssetIndex};
use schemagen_schema::{SchemaDocument, SchemaNode};

fn page_with_icons(names: &[String]) -> SchemaDocument {
    // Alternate between flat and nested placement to exercise pre-order.
    let mut page = SchemaNode::new("Page");
    let mut nested = SchemaNode::new("div");
    for (i, name) in names.iter().enumerate() {
        let icon = SchemaNode::new("Icon").with_prop("name", name.as_str());
        if i % 2 == 0 {
            if !nested.children().is_empty() {
                page = page.with_child(std::mem::replace(&mut nested, SchemaNode::new("div")));
            }
            page = page.with_child(icon);
        } else {
            nested = nested.with_child(icon);
        }
    }
    if !nested.children().is_empty() {
        page = page.with_child(nested);
    }
    SchemaDocument::single(page)
}

fn first_seen(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.contains(name) {
            out.push(name.clone());
        }
    }
    out
}

proptest! {
    #[test]
    fn scan_yields_first_seen_order(names in proptest::collection::vec("[a-c]{1}(:[a-c]{1})?", 0..24)) {
        let doc = page_with_icons(&names);
        let scan = collect_unique_refs(&doc, "Icon", "name");
        let got: Vec<String> = scan.index.names().map(str::to_owned).collect();
        prop_assert_eq!(got, first_seen(&names));
        prop_assert_eq!(scan.matched, names.len());
        prop_assert_eq!(scan.skipped_malformed, 0);
    }

    #[test]
    fn index_never_overwrites(pairs in proptest::collection::vec(("[a-d]", 0u32..100), 0..32)) {
        let mut index = AssetIndex::new();
        for (k, v) in &pairs {
            index.insert_first(k.clone(), *v);
        }
        for (k, v) in index.iter() {
            let first = pairs.iter().find(|(pk, _)| pk == k).map(|(_, pv)| *pv);
            prop_assert_eq!(Some(*v), first);
        }
    }
}
