//! Named collection of models.
//!
//! A mod usually builds each entity model once at startup and looks it up
//! by entity type every frame. The registry owns those models.

use rustc_hash::FxHashMap;

use crate::error::RigError;
use crate::model::Model;

/// Models keyed by name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: FxHashMap<String, Model>,
}

impl ModelRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `model` under `name`, returning the model it replaced.
    pub fn register(&mut self, name: impl Into<String>, model: Model) -> Option<Model> {
        let name = name.into();
        log::debug!("registering model '{name}' ({} nodes)", model.len());
        let previous = self.models.insert(name.clone(), model);
        if previous.is_some() {
            log::warn!("model '{name}' replaced an existing registration");
        }
        previous
    }

    /// Model registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Mutable model registered under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Model> {
        self.models.get_mut(name)
    }

    /// Mutable model registered under `name`, or an error naming it.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownModel`] if nothing is registered as `name`.
    pub fn model_mut(&mut self, name: &str) -> Result<&mut Model, RigError> {
        self.models
            .get_mut(name)
            .ok_or_else(|| RigError::UnknownModel(name.to_owned()))
    }

    /// Remove and return the model registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Model> {
        self.models.remove(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.models.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(nodes: &[&str]) -> Model {
        let mut model = Model::new();
        for name in nodes {
            let _ = model.add_node(name).unwrap();
        }
        model
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register("pig", model_with(&["body", "head"])).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("pig").unwrap().len(), 2);
        assert!(registry.get("cow").is_none());
    }

    #[test]
    fn reregistering_returns_previous() {
        let mut registry = ModelRegistry::new();
        let _ = registry.register("bat", model_with(&["body"]));
        let old = registry.register("bat", model_with(&["body", "wing"])).unwrap();
        assert_eq!(old.len(), 1);
        assert_eq!(registry.get("bat").unwrap().len(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ModelRegistry::new();
        for name in ["zombie", "bat", "pig"] {
            let _ = registry.register(name, Model::new());
        }
        assert_eq!(registry.names(), vec!["bat", "pig", "zombie"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut registry = ModelRegistry::new();
        let _ = registry.register("a", Model::new());
        let _ = registry.register("b", Model::new());
        assert!(registry.remove("a").is_some());
        assert!(registry.remove("a").is_none());
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn model_mut_reports_unknown_names() {
        let mut registry = ModelRegistry::new();
        let _ = registry.register("pig", model_with(&["body"]));
        let body = registry.model_mut("pig").unwrap().find("body");
        assert!(body.is_some());
        assert!(matches!(
            registry.model_mut("cow"),
            Err(RigError::UnknownModel(name)) if name == "cow"
        ));
    }
}
