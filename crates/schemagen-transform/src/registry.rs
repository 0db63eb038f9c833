//! Transform registry
//!
//! Provides [`TransformRegistry`] for selecting transforms by name, e.g. from
//! a configuration file.

use crate::dependencies::COMPONENT_DEPENDENCIES_NAME;
use crate::descriptor::TransformDescriptor;
use crate::error::TransformError;
use crate::icons::ICON_ASSETS_NAME;
use indexmap::IndexMap;
use std::fmt;

type Factory = Box<dyn Fn() -> TransformDescriptor + Send + Sync>;

/// Registry of transform factories keyed by name
///
/// Names resolve in registration order; registering an existing name
/// replaces its factory but keeps its position.
#[derive(Default)]
pub struct TransformRegistry {
    factories: IndexMap<String, Factory>,
}

impl TransformRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Create registry with built-in transforms
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ICON_ASSETS_NAME, || TransformDescriptor::IconAssets);
        registry.register(COMPONENT_DEPENDENCIES_NAME, || {
            TransformDescriptor::ComponentDependencies
        });
        registry
    }

    /// Register a factory under `name`
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> TransformDescriptor + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Check if transform exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Remove transform
    #[inline]
    pub fn remove(&mut self, name: &str) -> bool {
        self.factories.shift_remove(name).is_some()
    }

    /// Registered names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Get number of registered transforms
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build one descriptor
    ///
    /// # Errors
    /// Returns [`TransformError::Unknown`] if nothing is registered as `name`
    pub fn create(&self, name: &str) -> Result<TransformDescriptor, TransformError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| TransformError::Unknown(name.to_string()))
    }

    /// Build descriptors for `names`, keeping their order
    ///
    /// # Errors
    /// Returns [`TransformError::Unknown`] for the first unregistered name
    pub fn resolve<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<TransformDescriptor>, TransformError> {
        names.iter().map(|name| self.create(name.as_ref())).collect()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{FnTransform, Transform};

    #[test]
    fn registry_new_empty() {
        let registry = TransformRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_with_defaults() {
        let registry = TransformRegistry::with_defaults();
        assert_eq!(registry.names(), ["importIconsFile", "collectDependencies"]);
        assert!(registry.contains("importIconsFile"));
    }

    #[test]
    fn registry_register_custom() {
        let mut registry = TransformRegistry::with_defaults();
        registry.register("noop", || {
            TransformDescriptor::custom(FnTransform::new("noop", "does nothing", |_, _| {
                Ok(Vec::new())
            }))
        });
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.create("noop").unwrap().name(), "noop");
    }

    #[test]
    fn registry_remove() {
        let mut registry = TransformRegistry::with_defaults();
        assert!(registry.remove("importIconsFile"));
        assert!(!registry.contains("importIconsFile"));
        assert!(!registry.remove("importIconsFile"));
    }

    #[test]
    fn resolve_keeps_requested_order() {
        let registry = TransformRegistry::with_defaults();
        let resolved = registry
            .resolve(&["collectDependencies", "importIconsFile"])
            .unwrap();
        let names: Vec<&str> = resolved.iter().map(Transform::name).collect();
        assert_eq!(names, ["collectDependencies", "importIconsFile"]);
    }

    #[test]
    fn resolve_rejects_unknown() {
        let registry = TransformRegistry::with_defaults();
        let err = registry.resolve(&["importIconsFile", "minify"]).unwrap_err();
        assert!(matches!(err, TransformError::Unknown(ref name) if name == "minify"));
    }
}
