//! Scene object table and per-frame script dispatch
//!
//! The [`Scene`] owns every game object and plays the part of the host
//! engine's frame loop for scripts: `update(delta_time)` runs each attached
//! behaviour once. Object identity uses generational keys, so a handle to a
//! destroyed object simply stops resolving instead of dangling.

pub mod loader;
mod material;
mod script;
mod transform;

pub use material::MaterialComponent;
pub use script::ScriptComponent;
pub use transform::TransformComponent;

use crate::behaviour::{Behaviour, PropertySheet, ScriptError};
use crate::foundation::math::Vec3;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational handle to a game object in a [`Scene`]
    pub struct ObjectId;
}

/// Weak, possibly-absent reference from one object to another
///
/// Never owns the target. Holders must re-resolve against the scene before
/// every use; a reference whose target was destroyed resolves to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectRef {
    target: Option<ObjectId>,
}

impl ObjectRef {
    /// An unset reference
    #[must_use]
    pub const fn none() -> Self {
        Self { target: None }
    }

    /// A reference to `id`
    #[must_use]
    pub const fn to(id: ObjectId) -> Self {
        Self { target: Some(id) }
    }

    /// Whether the reference is set (the target may still be dead)
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.target.is_some()
    }

    /// The raw target id, without a liveness check
    #[must_use]
    pub const fn target(&self) -> Option<ObjectId> {
        self.target
    }
}

impl From<ObjectId> for ObjectRef {
    fn from(id: ObjectId) -> Self {
        Self::to(id)
    }
}

/// A named scene node owning its components
#[derive(Debug)]
pub struct GameObject {
    name: String,
    transform: Option<TransformComponent>,
    material: Option<MaterialComponent>,
    script: Option<ScriptComponent>,
}

impl GameObject {
    fn new(name: impl Into<String>, transform: Option<TransformComponent>) -> Self {
        Self {
            name: name.into(),
            transform,
            material: None,
            script: None,
        }
    }

    /// Object name (unique within a loaded scene, not enforced otherwise)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform component, if attached
    #[must_use]
    pub const fn transform(&self) -> Option<&TransformComponent> {
        self.transform.as_ref()
    }

    /// Mutable transform component, if attached
    pub fn transform_mut(&mut self) -> Option<&mut TransformComponent> {
        self.transform.as_mut()
    }

    /// Attach or replace the transform component
    pub fn set_transform(&mut self, transform: TransformComponent) {
        self.transform = Some(transform);
    }

    /// Material component, if attached
    #[must_use]
    pub const fn material(&self) -> Option<&MaterialComponent> {
        self.material.as_ref()
    }

    /// Mutable material component, if attached
    pub fn material_mut(&mut self) -> Option<&mut MaterialComponent> {
        self.material.as_mut()
    }

    /// Attach or replace the material component
    pub fn set_material(&mut self, material: MaterialComponent) {
        self.material = Some(material);
    }

    /// Script component, if any behaviours are attached
    #[must_use]
    pub const fn script(&self) -> Option<&ScriptComponent> {
        self.script.as_ref()
    }

    /// Attach a behaviour, creating the script component on first use
    pub fn attach_behaviour(
        &mut self,
        name: impl Into<String>,
        behaviour: Box<dyn Behaviour>,
        properties: PropertySheet,
    ) {
        self.script
            .get_or_insert_with(ScriptComponent::new)
            .attach(name, behaviour, properties);
    }

    pub(crate) fn require_transform(&mut self) -> Result<&mut TransformComponent, ScriptError> {
        match self.transform.as_mut() {
            Some(transform) => Ok(transform),
            None => Err(ScriptError::MissingComponent {
                object: self.name.clone(),
                component: "transform",
            }),
        }
    }

    pub(crate) fn require_material(&mut self) -> Result<&mut MaterialComponent, ScriptError> {
        match self.material.as_mut() {
            Some(material) => Ok(material),
            None => Err(ScriptError::MissingComponent {
                object: self.name.clone(),
                component: "material",
            }),
        }
    }
}

/// Owner of all game objects and driver of the script update
#[derive(Debug)]
pub struct Scene {
    objects: SlotMap<ObjectId, GameObject>,
    /// Spawn order; scripts run in this order every frame
    order: Vec<ObjectId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Spawn an object with an identity transform
    pub fn spawn(&mut self, name: impl Into<String>) -> ObjectId {
        self.spawn_at(name, Vec3::zeros())
    }

    /// Spawn an object with a transform at `position`
    pub fn spawn_at(&mut self, name: impl Into<String>, position: Vec3) -> ObjectId {
        let object = GameObject::new(name, Some(TransformComponent::from_position(position)));
        self.insert(object)
    }

    /// Spawn an object with no components at all
    pub fn spawn_empty(&mut self, name: impl Into<String>) -> ObjectId {
        self.insert(GameObject::new(name, None))
    }

    fn insert(&mut self, object: GameObject) -> ObjectId {
        let id = self.objects.insert(object);
        self.order.push(id);
        id
    }

    /// Destroy an object
    ///
    /// Returns `false` if the id was already dead. References held by other
    /// objects stop resolving from this point on.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        if self.objects.remove(id).is_some() {
            self.order.retain(|&other| other != id);
            true
        } else {
            false
        }
    }

    /// Whether an id refers to a live object
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Look up an object
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Look up an object mutably
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// Find an object by name (first match in spawn order)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|object| object.name == name))
    }

    /// Number of live objects
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over live objects in spawn order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.order
            .iter()
            .filter_map(|&id| self.objects.get(id).map(|object| (id, object)))
    }

    /// Attach a behaviour to an object
    ///
    /// Returns `false` if the object is dead.
    pub fn attach_behaviour(
        &mut self,
        id: ObjectId,
        name: impl Into<String>,
        behaviour: Box<dyn Behaviour>,
        properties: PropertySheet,
    ) -> bool {
        match self.objects.get_mut(id) {
            Some(object) => {
                object.attach_behaviour(name, behaviour, properties);
                true
            }
            None => false,
        }
    }

    /// Run one frame of every attached behaviour, in spawn order
    ///
    /// Each object's script component is detached for the duration of its
    /// own run so behaviours can freely read and write other objects.
    pub fn update(&mut self, delta_time: f32) {
        let ids = self.order.clone();
        for id in ids {
            let Some(mut script) = self
                .objects
                .get_mut(id)
                .and_then(|object| object.script.take())
            else {
                continue;
            };

            script.run(self, id, delta_time);

            if let Some(object) = self.objects.get_mut(id) {
                object.script = Some(script);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_lookup() {
        let mut scene = Scene::new();
        let id = scene.spawn_at("probe", Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(scene.len(), 1);
        assert!(scene.contains(id));
        let object = scene.object(id).unwrap();
        assert_eq!(object.name(), "probe");
        assert_eq!(object.transform().unwrap().position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_despawned_id_never_resolves_again() {
        let mut scene = Scene::new();
        let id = scene.spawn("ghost");

        assert!(scene.despawn(id));
        assert!(!scene.despawn(id));
        assert!(!scene.contains(id));
        assert!(scene.object(id).is_none());

        // A new spawn must not revive the old handle
        let _other = scene.spawn("ghost");
        assert!(!scene.contains(id));
    }

    #[test]
    fn test_find_by_name() {
        let mut scene = Scene::new();
        let first = scene.spawn("sun");
        let _second = scene.spawn("moon");

        assert_eq!(scene.find("sun"), Some(first));
        assert_eq!(scene.find("comet"), None);
    }

    #[test]
    fn test_iter_follows_spawn_order() {
        let mut scene = Scene::new();
        let a = scene.spawn("a");
        let b = scene.spawn("b");
        let c = scene.spawn("c");
        scene.despawn(b);

        let names: Vec<&str> = scene.iter().map(|(_, object)| object.name()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(scene.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn test_spawn_empty_has_no_components() {
        let mut scene = Scene::new();
        let id = scene.spawn_empty("bare");

        let object = scene.object(id).unwrap();
        assert!(object.transform().is_none());
        assert!(object.material().is_none());
        assert!(object.script().is_none());
    }
}
