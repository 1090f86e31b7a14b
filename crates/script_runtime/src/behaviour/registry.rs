//! Behaviour name registry
//!
//! Scene files attach behaviours by name; the registry maps those names to
//! factories producing fresh, unstarted instances. The built-in set covers
//! the three shipped behaviours, and applications can register their own.

use super::{Behaviour, Orbiter, Rotator, UniformBinder};
use std::collections::HashMap;

/// Factory producing a fresh behaviour instance
pub type BehaviourFactory = fn() -> Box<dyn Behaviour>;

/// Maps behaviour names to factories
pub struct BehaviourRegistry {
    factories: HashMap<String, BehaviourFactory>,
}

impl BehaviourRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the built-in behaviours registered
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(UniformBinder::NAME, || Box::new(UniformBinder::new()));
        registry.register(Orbiter::NAME, || Box::new(Orbiter::new()));
        registry.register(Rotator::NAME, || Box::new(Rotator::new()));
        registry
    }

    /// Register a behaviour factory under a name
    ///
    /// Re-registering a name replaces the previous factory.
    pub fn register(&mut self, name: impl Into<String>, factory: BehaviourFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Whether a behaviour of this name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Create a fresh instance of a registered behaviour
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn Behaviour>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Iterate over registered names (unspecified order)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for BehaviourRegistry {
    /// The default registry carries the built-in behaviours
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviour::{PropertySheet, ScriptContext, ScriptError};
    use crate::scene::Scene;

    #[test]
    fn test_builtins_are_registered() {
        let registry = BehaviourRegistry::with_builtins();

        assert!(registry.contains("BindToUniform"));
        assert!(registry.contains("Circle"));
        assert!(registry.contains("Rotate"));
        assert!(registry.instantiate("Rotate").is_some());
    }

    #[test]
    fn test_unknown_name() {
        let registry = BehaviourRegistry::with_builtins();

        assert!(!registry.contains("Teleport"));
        assert!(registry.instantiate("Teleport").is_none());
    }

    #[test]
    fn test_custom_registration() {
        struct Noop;
        impl crate::behaviour::Behaviour for Noop {
            fn update(
                &mut self,
                _ctx: &mut ScriptContext<'_>,
                _delta_time: f32,
            ) -> Result<(), ScriptError> {
                Ok(())
            }
        }

        let mut registry = BehaviourRegistry::new();
        registry.register("Noop", || Box::new(Noop));

        let mut behaviour = registry.instantiate("Noop").unwrap();
        let mut scene = Scene::new();
        let object = scene.spawn("test");
        let mut ctx = ScriptContext::new(&mut scene, object);
        behaviour.start(&PropertySheet::new(), &mut ctx).unwrap();
        behaviour.update(&mut ctx, 0.016).unwrap();
    }
}
