//! Icon asset generation over realistic documents

use pretty_assertions::assert_eq;
use schemagen_assets::ResourceMap;
use schemagen_test_utils::{page_with_icons, resource_map_for, sample_document, sample_resource_map};
use schemagen_transform::{IconAssets, Transform, TransformContext, TransformRegistry};

fn names(artifacts: &[schemagen_artifact::FileArtifact]) -> Vec<String> {
    artifacts.iter().map(|a| a.full_path()).collect()
}

#[test]
fn sample_document_yields_hits_only() {
    let doc = sample_document();
    let ctx = TransformContext::new().with_icons(sample_resource_map());
    let (out, stats) = IconAssets.generate(&doc, &ctx);

    assert_eq!(
        names(&out),
        [
            "./src/assets/icons/mdi/home.svg",
            "./src/assets/icons/ep/edit.svg"
        ]
    );
    assert_eq!(stats.matched, 6);
    assert_eq!(stats.skipped_malformed, 1);
    assert_eq!(stats.skipped_unnamespaced, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn embedded_icons_map_resolves() {
    let doc = sample_document();
    let embedded = doc.embedded("iconsMap").cloned().unwrap();
    let icons = ResourceMap::from_value(embedded).unwrap();
    let ctx = TransformContext::new().with_icons(icons);

    let out = IconAssets.run(&doc, &ctx).unwrap();
    assert_eq!(out.len(), 2);
}

#[test]
fn order_follows_first_occurrence() {
    let doc = page_with_icons(&["x:b", "x:a", "x:b", "x:c"]);
    let ctx = TransformContext::new().with_icons(resource_map_for(&["x:a", "x:b", "x:c"]));
    let out = IconAssets.run(&doc, &ctx).unwrap();
    let files: Vec<&str> = out.iter().map(|a| a.file_name()).collect();
    assert_eq!(files, ["b.svg", "a.svg", "c.svg"]);
}

#[test]
fn empty_resource_map_emits_nothing() {
    let doc = sample_document();
    let out = IconAssets.run(&doc, &TransformContext::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let doc = sample_document();
    let ctx = TransformContext::new().with_icons(sample_resource_map());
    let first = IconAssets.run(&doc, &ctx).unwrap();
    let second = IconAssets.run(&doc, &ctx).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        schemagen_artifact::fingerprint_all(&first),
        schemagen_artifact::fingerprint_all(&second)
    );
}

#[test]
fn registry_builtins_run_over_sample() {
    let registry = TransformRegistry::with_defaults();
    let transforms = registry.resolve(registry.names().as_slice()).unwrap();
    let ctx = TransformContext::new().with_icons(sample_resource_map());
    let total: usize = transforms
        .iter()
        .map(|t| t.run(&sample_document(), &ctx).unwrap().len())
        .sum();
    // no component map, so only icons are produced
    assert_eq!(total, 2);
}
