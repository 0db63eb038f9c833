//! Dependency manifest transform
//!
//! Collects the packages providing the components used in a document and
//! writes them to `dependencies.json`.

use crate::context::TransformContext;
use crate::error::TransformError;
use crate::transform::Transform;
use indexmap::IndexMap;
use schemagen_artifact::FileArtifact;
use schemagen_assets::AssetIndex;
use schemagen_schema::SchemaDocument;
use serde::Serialize;

/// Registered name of [`ComponentDependencies`]
pub const COMPONENT_DEPENDENCIES_NAME: &str = "collectDependencies";

/// File name of the emitted manifest
pub const MANIFEST_FILE_NAME: &str = "dependencies.json";

const DESCRIPTION: &str = "collect component package dependencies";

#[derive(Serialize)]
struct Manifest<'a> {
    dependencies: &'a IndexMap<String, String>,
}

/// Dependency manifest transform
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentDependencies;

impl ComponentDependencies {
    /// Create transform
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve `package → version` in first-seen order
    ///
    /// # Errors
    /// Returns [`TransformError::Conflict`] when two components need
    /// different versions of one package
    pub fn resolve(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<IndexMap<String, String>, TransformError> {
        let mut seen = AssetIndex::new();
        document.traverse(|node| {
            if let Some(name) = node.component_name() {
                seen.insert_first(name, ());
            }
        });

        let mut packages: IndexMap<String, String> = IndexMap::new();
        let mut unresolved = 0usize;
        for component in seen.names() {
            let Some(entry) = context.components().get(component) else {
                unresolved += 1;
                continue;
            };
            match packages.get(&entry.package) {
                Some(existing) if *existing != entry.version => {
                    return Err(TransformError::conflict(
                        &entry.package,
                        existing,
                        &entry.version,
                    ));
                }
                Some(_) => {}
                None => {
                    packages.insert(entry.package.clone(), entry.version.clone());
                }
            }
        }

        tracing::trace!(
            components = seen.len(),
            unresolved,
            packages = packages.len(),
            "dependencies resolved"
        );
        Ok(packages)
    }
}

impl Transform for ComponentDependencies {
    fn name(&self) -> &str {
        COMPONENT_DEPENDENCIES_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn run(
        &self,
        document: &SchemaDocument,
        context: &TransformContext,
    ) -> Result<Vec<FileArtifact>, TransformError> {
        let packages = self.resolve(document, context)?;
        if packages.is_empty() {
            return Ok(Vec::new());
        }

        let mut content = serde_json::to_string_pretty(&Manifest {
            dependencies: &packages,
        })?;
        content.push('\n');

        let artifact = FileArtifact::new(
            "json",
            MANIFEST_FILE_NAME,
            context.options().dependencies_path.clone(),
            content,
        )?;
        Ok(vec![artifact])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentEntry, ComponentMap};
    use pretty_assertions::assert_eq;
    use schemagen_schema::SchemaNode;

    fn context() -> TransformContext {
        TransformContext::new().with_components(
            ComponentMap::new()
                .with("TinyGrid", ComponentEntry::new("@opentiny/vue", "~3.10.0"))
                .with("TinyButton", ComponentEntry::new("@opentiny/vue", "~3.10.0"))
                .with("ElInput", ComponentEntry::new("element-plus", "2.4.2")),
        )
    }

    #[test]
    fn manifest_lists_packages_in_first_seen_order() {
        let doc = SchemaDocument::single(SchemaNode::new("Page").with_children([
            SchemaNode::new("ElInput"),
            SchemaNode::new("div").with_child(SchemaNode::new("TinyGrid")),
            SchemaNode::new("TinyButton"),
        ]));
        let out = ComponentDependencies.run(&doc, &context()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].full_path(), "./src/dependencies.json");
        assert_eq!(out[0].file_type(), "json");
        assert_eq!(
            out[0].file_content(),
            "{\n  \"dependencies\": {\n    \"element-plus\": \"2.4.2\",\n    \"@opentiny/vue\": \"~3.10.0\"\n  }\n}\n"
        );
    }

    #[test]
    fn conflicting_versions_fail() {
        let ctx = context().with_components(
            ComponentMap::new()
                .with("A", ComponentEntry::new("pkg", "1.0.0"))
                .with("B", ComponentEntry::new("pkg", "2.0.0")),
        );
        let doc = SchemaDocument::single(
            SchemaNode::new("Page").with_children([SchemaNode::new("A"), SchemaNode::new("B")]),
        );
        let err = ComponentDependencies.run(&doc, &ctx).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Conflict { ref package, ref existing, ref incoming }
                if package == "pkg" && existing == "1.0.0" && incoming == "2.0.0"
        ));
    }

    #[test]
    fn nothing_resolved_emits_nothing() {
        let doc = SchemaDocument::single(SchemaNode::new("div"));
        let out = ComponentDependencies.run(&doc, &context()).unwrap();
        assert!(out.is_empty());
    }
}
