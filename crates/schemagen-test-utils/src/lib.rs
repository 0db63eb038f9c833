//! Testing utilities for schemagen workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use schemagen_artifact::FileArtifact;
use schemagen_assets::{IconResource, ResourceMap};
use schemagen_schema::{SchemaDocument, SchemaNode};

/// Page envelope with nested icons, a duplicate, a miss, a bare name and a
/// text child
pub const SAMPLE_DOCUMENT_JSON: &str = r#"{
  "pageSchema": [
    {
      "componentName": "Page",
      "props": { "className": "home" },
      "children": [
        { "componentName": "Icon", "props": { "name": "mdi:home" } },
        {
          "componentName": "div",
          "children": [
            { "componentName": "Text", "children": "Welcome" },
            { "componentName": "Icon", "props": { "name": "ep:edit" } },
            { "componentName": "Icon", "props": { "name": "mdi:home", "color": "red" } }
          ]
        },
        { "componentName": "Icon", "props": { "name": "mdi:missing" } },
        { "componentName": "Icon", "props": { "name": "search" } },
        { "componentName": "Icon" }
      ]
    }
  ],
  "iconsMap": {
    "mdi:home": { "width": 24, "height": 24, "body": "<path d=\"M10 20v-6h4v6\"/>" },
    "ep:edit": { "width": 1024, "height": 1024, "body": "<path d=\"M832 512\"/>" }
  }
}"#;

pub fn icon_node(name: &str) -> SchemaNode {
    SchemaNode::new("Icon").with_prop("name", name)
}

/// Single page whose children are icons with the given names, in order
pub fn page_with_icons(names: &[&str]) -> SchemaDocument {
    SchemaDocument::single(
        SchemaNode::new("Page").with_children(names.iter().map(|name| icon_node(name))),
    )
}

pub fn sample_document() -> SchemaDocument {
    SchemaDocument::from_json_str(SAMPLE_DOCUMENT_JSON).unwrap()
}

pub fn sample_resource_map() -> ResourceMap {
    let mut map = ResourceMap::new();
    map.insert(
        "mdi:home",
        IconResource::new(24.0, 24.0, "<path d=\"M10 20v-6h4v6\"/>").unwrap(),
    );
    map.insert(
        "mdi:account",
        IconResource::new(24.0, 24.0, "<circle r=\"4\"/>").unwrap(),
    );
    map.insert(
        "ep:edit",
        IconResource::new(1024.0, 1024.0, "<path d=\"M832 512\"/>").unwrap(),
    );
    map
}

/// Resource map holding `collection:item` for every name, each with a
/// distinct body
pub fn resource_map_for(names: &[&str]) -> ResourceMap {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let body = format!("<path d=\"M{i}\"/>");
            ((*name).to_string(), IconResource::new(24.0, 24.0, body).unwrap())
        })
        .collect()
}

pub fn create_svg_artifact(collection: &str, item: &str) -> FileArtifact {
    FileArtifact::at(
        "svg",
        format!("{item}.svg"),
        &format!("./src/assets/icons/{collection}"),
        "<svg/>",
    )
    .unwrap()
}
