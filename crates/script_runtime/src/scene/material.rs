//! Material component for scene objects
//!
//! Holds the named shader uniforms a material exposes to scripts. The render
//! side of materials (pipelines, descriptor sets) lives in the host engine;
//! this component is only the script-visible uniform table.

use crate::foundation::math::Vec3;
use std::collections::HashMap;

/// Script-visible uniform table of a material
///
/// Uniforms must be declared before they can be written: a `set_uniform` on
/// an undeclared name stores nothing. Declaration happens when the material
/// is built (scene setup or scene file loading), never from script code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialComponent {
    uniforms: HashMap<String, Vec3>,
}

impl MaterialComponent {
    /// Create a material with no declared uniforms
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a uniform with an initial value
    ///
    /// Re-declaring an existing name overwrites its value.
    pub fn declare_uniform(&mut self, name: impl Into<String>, initial: Vec3) {
        self.uniforms.insert(name.into(), initial);
    }

    /// Builder pattern: declare a uniform
    #[must_use]
    pub fn with_uniform(mut self, name: impl Into<String>, initial: Vec3) -> Self {
        self.declare_uniform(name, initial);
        self
    }

    /// Whether a uniform of this name is declared
    #[must_use]
    pub fn has_uniform(&self, name: &str) -> bool {
        self.uniforms.contains_key(name)
    }

    /// Overwrite a declared uniform's value
    ///
    /// Returns `false` without storing anything if the name was never
    /// declared.
    pub fn set_uniform(&mut self, name: &str, value: Vec3) -> bool {
        match self.uniforms.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Current value of a declared uniform
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<Vec3> {
        self.uniforms.get(name).copied()
    }

    /// Iterate over all declared uniforms (unspecified order)
    pub fn uniforms(&self) -> impl Iterator<Item = (&str, Vec3)> {
        self.uniforms.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of declared uniforms
    #[must_use]
    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    /// Whether no uniforms are declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }
}
