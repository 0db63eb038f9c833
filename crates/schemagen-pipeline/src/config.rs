//! Pipeline configuration
//!
//! [`PipelineConfig`] is read from TOML:
//!
//! ```toml
//! transforms = ["importIconsFile", "collectDependencies"]
//! icon_component = "Icon"
//! icon_name_prop = "name"
//! icons_root = "./src/assets/icons"
//! dependencies_path = "./src"
//!
//! [limits]
//! max_depth = 48
//! max_nodes = 1000000
//! ```
//!
//! Every key is optional.

use crate::error::ConfigError;
use schemagen_artifact::ArtifactPath;
use schemagen_schema::Limits;
use schemagen_transform::{
    TransformOptions, TransformRegistry, COMPONENT_DEPENDENCIES_NAME, DEFAULT_DEPENDENCIES_PATH,
    DEFAULT_ICONS_ROOT, DEFAULT_ICON_COMPONENT, DEFAULT_ICON_NAME_PROP, ICON_ASSETS_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Transform names, run in this order
    pub transforms: Vec<String>,
    /// Component matched by the icon transform
    pub icon_component: String,
    /// Prop holding the icon reference
    pub icon_name_prop: String,
    /// Root directory for icon artifacts
    pub icons_root: String,
    /// Directory of `dependencies.json`
    pub dependencies_path: String,
    /// Document limits
    pub limits: Limits,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            transforms: vec![
                ICON_ASSETS_NAME.to_string(),
                COMPONENT_DEPENDENCIES_NAME.to_string(),
            ],
            icon_component: DEFAULT_ICON_COMPONENT.to_string(),
            icon_name_prop: DEFAULT_ICON_NAME_PROP.to_string(),
            icons_root: DEFAULT_ICONS_ROOT.to_string(),
            dependencies_path: DEFAULT_DEPENDENCIES_PATH.to_string(),
            limits: Limits::default(),
        }
    }
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML
    ///
    /// # Errors
    /// Returns error on malformed TOML or unknown keys
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&input)?;
        tracing::debug!(path = %path.display(), transforms = ?config.transforms, "loaded config");
        Ok(config)
    }

    /// With transform list
    #[must_use]
    pub fn with_transforms<I, S>(mut self, transforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transforms = transforms.into_iter().map(Into::into).collect();
        self
    }

    /// With icon component
    #[inline]
    #[must_use]
    pub fn with_icon_component(mut self, component: impl Into<String>) -> Self {
        self.icon_component = component.into();
        self
    }

    /// With icons root
    #[inline]
    #[must_use]
    pub fn with_icons_root(mut self, root: impl Into<String>) -> Self {
        self.icons_root = root.into();
        self
    }

    /// With limits
    #[inline]
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Check every option against `registry`
    ///
    /// # Errors
    /// Returns the first problem found
    pub fn validate(&self, registry: &TransformRegistry) -> Result<(), ConfigError> {
        if let Some(unknown) = self.transforms.iter().find(|name| !registry.contains(name)) {
            return Err(ConfigError::UnknownTransform(unknown.clone()));
        }
        self.transform_options().map(|_| ())
    }

    /// Options handed to the transforms
    ///
    /// # Errors
    /// Returns error if a string option is empty or a path does not parse
    pub fn transform_options(&self) -> Result<TransformOptions, ConfigError> {
        if self.icon_component.is_empty() {
            return Err(ConfigError::Empty("icon_component"));
        }
        if self.icon_name_prop.is_empty() {
            return Err(ConfigError::Empty("icon_name_prop"));
        }
        Ok(TransformOptions::new()
            .with_icon_component(&self.icon_component)
            .with_icon_name_prop(&self.icon_name_prop)
            .with_icons_root(parse_path("icons_root", &self.icons_root)?)
            .with_dependencies_path(parse_path("dependencies_path", &self.dependencies_path)?))
    }
}

fn parse_path(field: &'static str, value: &str) -> Result<ArtifactPath, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidPath { field, source })
}
