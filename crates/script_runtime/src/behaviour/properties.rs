//! Configured behaviour properties
//!
//! The host supplies each behaviour instance a sheet of named, typed values
//! when it is attached (from a scene file or programmatically). Behaviours
//! resolve the sheet once in `start`, falling back to their documented
//! defaults for anything absent; the sheet is read-only after that.

use crate::foundation::math::Vec3;
use crate::scene::ObjectRef;
use std::collections::HashMap;

/// A single configured input value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Text value
    Text(String),
    /// 3D vector value
    Vector(Vec3),
    /// Weak reference to another scene object
    Object(ObjectRef),
}

/// Named, typed configuration for one behaviour instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySheet {
    values: HashMap<String, PropertyValue>,
}

impl PropertySheet {
    /// Create an empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value of the name
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder pattern: set a text property
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, PropertyValue::Text(value.into()));
        self
    }

    /// Builder pattern: set a vector property
    #[must_use]
    pub fn with_vector(mut self, name: impl Into<String>, value: Vec3) -> Self {
        self.insert(name, PropertyValue::Vector(value));
        self
    }

    /// Builder pattern: set an object-reference property
    #[must_use]
    pub fn with_object(mut self, name: impl Into<String>, value: ObjectRef) -> Self {
        self.insert(name, PropertyValue::Object(value));
        self
    }

    /// Raw value of a property, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Resolve a text property, falling back to `default`
    ///
    /// A value of the wrong type is logged and treated as absent.
    #[must_use]
    pub fn text(&self, name: &str, default: &str) -> String {
        match self.values.get(name) {
            Some(PropertyValue::Text(value)) => value.clone(),
            Some(other) => {
                log::warn!("property `{name}` is not text (found {other:?}), using default");
                default.to_owned()
            }
            None => default.to_owned(),
        }
    }

    /// Resolve a vector property, falling back to `default`
    #[must_use]
    pub fn vector(&self, name: &str, default: Vec3) -> Vec3 {
        match self.values.get(name) {
            Some(PropertyValue::Vector(value)) => *value,
            Some(other) => {
                log::warn!("property `{name}` is not a vector (found {other:?}), using default");
                default
            }
            None => default,
        }
    }

    /// Resolve an object-reference property, falling back to unset
    #[must_use]
    pub fn object(&self, name: &str) -> ObjectRef {
        match self.values.get(name) {
            Some(PropertyValue::Object(value)) => *value,
            Some(other) => {
                log::warn!("property `{name}` is not an object reference (found {other:?}), treating as unset");
                ObjectRef::none()
            }
            None => ObjectRef::none(),
        }
    }

    /// Iterate over all properties (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of properties in the sheet
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sheet has no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
