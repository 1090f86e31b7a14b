//! Behaviour lifecycle and the scripting surface behaviours consume
//!
//! A [`Behaviour`] is a per-object script run by the host frame loop: one
//! `start` when the behaviour first runs, then one `update` per frame. All
//! access to the scene goes through a [`ScriptContext`] borrowed for the
//! duration of the call, which is also where weak object references are
//! re-resolved every frame.

mod bind_to_uniform;
mod orbit;
mod properties;
mod registry;
mod rotate;

pub use bind_to_uniform::UniformBinder;
pub use orbit::Orbiter;
pub use properties::{PropertySheet, PropertyValue};
pub use registry::BehaviourRegistry;
pub use rotate::Rotator;

use crate::scene::{MaterialComponent, ObjectId, ObjectRef, Scene, TransformComponent};
use thiserror::Error;

/// Per-object script lifecycle
///
/// Implement this trait to run logic once per frame on a scene object.
pub trait Behaviour: Send {
    /// One-time initialization
    ///
    /// Called before the first `update`, with the configured properties
    /// supplied when the behaviour was attached. Resolve properties into
    /// plain config fields here; the sheet is not available later.
    fn start(
        &mut self,
        properties: &PropertySheet,
        ctx: &mut ScriptContext<'_>,
    ) -> Result<(), ScriptError> {
        let _ = (properties, ctx);
        Ok(())
    }

    /// Per-frame update
    ///
    /// # Arguments
    /// * `ctx` - Access to the owning object and the rest of the scene
    /// * `delta_time` - Time since the last frame in seconds
    fn update(&mut self, ctx: &mut ScriptContext<'_>, delta_time: f32) -> Result<(), ScriptError>;
}

/// Errors surfaced from behaviour execution
///
/// Component lookups are the only fallible operations behaviours perform;
/// a failure here means the scene was assembled without a component the
/// script requires.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The object exists but lacks the requested component
    #[error("object `{object}` has no {component} component")]
    MissingComponent {
        /// Name of the object that was missing the component
        object: String,
        /// Component kind that was requested
        component: &'static str,
    },

    /// The object id no longer resolves to a live object
    #[error("object {0:?} is no longer alive")]
    ObjectNotFound(ObjectId),
}

/// Scene access scoped to one behaviour call
///
/// Borrows the scene mutably together with the id of the object the
/// behaviour is attached to.
pub struct ScriptContext<'a> {
    scene: &'a mut Scene,
    object: ObjectId,
}

impl<'a> ScriptContext<'a> {
    /// Create a context for `object` over `scene`
    pub fn new(scene: &'a mut Scene, object: ObjectId) -> Self {
        Self { scene, object }
    }

    /// Id of the object this behaviour is attached to
    #[must_use]
    pub const fn object_id(&self) -> ObjectId {
        self.object
    }

    /// Read access to the whole scene
    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.scene
    }

    /// The owning object's transform
    pub fn transform(&mut self) -> Result<&mut TransformComponent, ScriptError> {
        self.transform_of(self.object)
    }

    /// The owning object's material
    pub fn material(&mut self) -> Result<&mut MaterialComponent, ScriptError> {
        self.scene
            .object_mut(self.object)
            .ok_or(ScriptError::ObjectNotFound(self.object))?
            .require_material()
    }

    /// Resolve a weak object reference against the live scene
    ///
    /// Returns `None` for an unset reference and for a reference whose
    /// target has been destroyed. Resolution happens per call; ids are
    /// never cached across frames.
    #[must_use]
    pub fn resolve(&self, reference: ObjectRef) -> Option<ObjectId> {
        reference
            .target()
            .filter(|&id| self.scene.contains(id))
    }

    /// Transform of an already-resolved object
    pub fn transform_of(&mut self, id: ObjectId) -> Result<&mut TransformComponent, ScriptError> {
        self.scene
            .object_mut(id)
            .ok_or(ScriptError::ObjectNotFound(id))?
            .require_transform()
    }
}
