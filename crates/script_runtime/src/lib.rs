//! # Script Runtime
//!
//! A per-frame scene scripting runtime extracted to run headless: a scene
//! table of game objects, the component surface behaviours consume
//! (transforms and material uniforms), and a small set of built-in
//! behaviours driven by a host frame loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use script_runtime::prelude::*;
//!
//! let mut scene = Scene::new();
//! let spinner = scene.spawn("spinner");
//! scene.attach_behaviour(spinner, "Rotate", Box::new(Rotator::new()), PropertySheet::new());
//!
//! // Host frame loop: one update per rendered frame.
//! for _ in 0..60 {
//!     scene.update(1.0 / 60.0);
//! }
//!
//! let rotation = scene.object(spinner).unwrap().transform().unwrap().rotation();
//! assert!(rotation.z > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod behaviour;
pub mod foundation;
pub mod scene;

pub use behaviour::{Behaviour, ScriptContext, ScriptError};
pub use scene::{GameObject, ObjectId, ObjectRef, Scene};

/// Common imports for runtime users
pub mod prelude {
    pub use crate::{
        behaviour::{
            Behaviour, BehaviourRegistry, Orbiter, PropertySheet, PropertyValue, Rotator,
            ScriptContext, ScriptError, UniformBinder,
        },
        foundation::{
            math::Vec3,
            time::FrameClock,
        },
        scene::{
            loader::{load_scene, save_scene, SceneLoadError},
            GameObject, MaterialComponent, ObjectId, ObjectRef, Scene, TransformComponent,
        },
    };
}
