//! Transform inputs
//!
//! [`TransformContext`] bundles the read-only inputs a transform may consult
//! besides the document: the icon resource map, the component map and the
//! [`TransformOptions`].

use crate::components::ComponentMap;
use schemagen_artifact::ArtifactPath;
use schemagen_assets::ResourceMap;

/// Component whose `name` prop references an icon
pub const DEFAULT_ICON_COMPONENT: &str = "Icon";

/// Prop holding the icon reference
pub const DEFAULT_ICON_NAME_PROP: &str = "name";

/// Directory under which icon collections are written
pub const DEFAULT_ICONS_ROOT: &str = "./src/assets/icons";

/// Directory of the dependency manifest
pub const DEFAULT_DEPENDENCIES_PATH: &str = "./src";

/// Options shared by the built-in transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Component name matched by the icon transform
    pub icon_component: String,
    /// Prop read from matched components
    pub icon_name_prop: String,
    /// Root directory for icon artifacts
    pub icons_root: ArtifactPath,
    /// Directory of `dependencies.json`
    pub dependencies_path: ArtifactPath,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            icon_component: DEFAULT_ICON_COMPONENT.to_string(),
            icon_name_prop: DEFAULT_ICON_NAME_PROP.to_string(),
            icons_root: dot_path(&["src", "assets", "icons"]),
            dependencies_path: dot_path(&["src"]),
        }
    }
}

/// `./a/b/...` from constant segments
fn dot_path(segments: &[&str]) -> ArtifactPath {
    segments
        .iter()
        .try_fold(ArtifactPath::dot(), |path, segment| path.child(*segment))
        .unwrap_or_default()
}

impl TransformOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With icon component name
    #[inline]
    #[must_use]
    pub fn with_icon_component(mut self, component: impl Into<String>) -> Self {
        self.icon_component = component.into();
        self
    }

    /// With icon name prop
    #[inline]
    #[must_use]
    pub fn with_icon_name_prop(mut self, prop: impl Into<String>) -> Self {
        self.icon_name_prop = prop.into();
        self
    }

    /// With icons root directory
    #[inline]
    #[must_use]
    pub fn with_icons_root(mut self, root: ArtifactPath) -> Self {
        self.icons_root = root;
        self
    }

    /// With dependency manifest directory
    #[inline]
    #[must_use]
    pub fn with_dependencies_path(mut self, path: ArtifactPath) -> Self {
        self.dependencies_path = path;
        self
    }
}

/// Read-only inputs of a transform run
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    icons: ResourceMap,
    components: ComponentMap,
    options: TransformOptions,
}

impl TransformContext {
    /// Empty context with default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With icon resources
    #[inline]
    #[must_use]
    pub fn with_icons(mut self, icons: ResourceMap) -> Self {
        self.icons = icons;
        self
    }

    /// With component map
    #[inline]
    #[must_use]
    pub fn with_components(mut self, components: ComponentMap) -> Self {
        self.components = components;
        self
    }

    /// With options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Icon resources
    #[inline]
    #[must_use]
    pub fn icons(&self) -> &ResourceMap {
        &self.icons
    }

    /// Component map
    #[inline]
    #[must_use]
    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Options
    #[inline]
    #[must_use]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_constants() {
        let options = TransformOptions::default();
        assert_eq!(options.icons_root.to_string(), DEFAULT_ICONS_ROOT);
        assert_eq!(options.dependencies_path.to_string(), DEFAULT_DEPENDENCIES_PATH);
        assert_eq!(options.icon_component, "Icon");
        assert_eq!(options.icon_name_prop, "name");
    }

    #[test]
    fn builder_overrides() {
        let root: ArtifactPath = "public/icons".parse().unwrap();
        let options = TransformOptions::new()
            .with_icon_component("SvgIcon")
            .with_icons_root(root.clone());
        assert_eq!(options.icon_component, "SvgIcon");
        assert_eq!(options.icons_root, root);
    }
}
