//! Scene file loading and saving
//!
//! Scenes persist as RON: a list of named objects with their transforms,
//! declared material uniforms, and script attachments. Object-reference
//! properties are stored by object name and resolved in a second pass after
//! every object exists, so scene files may reference objects declared later.

use crate::behaviour::{BehaviourRegistry, PropertySheet, PropertyValue};
use crate::foundation::math::Vec3;
use crate::scene::{MaterialComponent, ObjectId, ObjectRef, Scene, TransformComponent};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or saving a scene file
#[derive(Error, Debug)]
pub enum SceneLoadError {
    /// The file could not be read or written
    #[error("scene file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid RON for the scene schema
    #[error("failed to parse scene: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The scene could not be serialized
    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] ron::Error),

    /// Two objects share a name, which would make references ambiguous
    #[error("duplicate object name `{0}`")]
    DuplicateObject(String),

    /// A script property references an object name not present in the file
    #[error("script on `{object}` references unknown object `{target}`")]
    UnknownObject {
        /// Object carrying the script
        object: String,
        /// The name that failed to resolve
        target: String,
    },

    /// A script attachment names a behaviour the registry does not know
    #[error("unknown behaviour `{behaviour}` on object `{object}`")]
    UnknownBehaviour {
        /// Object carrying the script
        object: String,
        /// The unregistered behaviour name
        behaviour: String,
    },
}

/// 3D vector with named fields, the on-disk representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Vec3Decl {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl From<Vec3> for Vec3Decl {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Vec3Decl> for Vec3 {
    fn from(v: Vec3Decl) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

fn unit_scale() -> Vec3Decl {
    Vec3Decl { x: 1.0, y: 1.0, z: 1.0 }
}

/// On-disk transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformDecl {
    /// World position
    #[serde(default)]
    pub position: Vec3Decl,
    /// Euler rotation in radians
    #[serde(default)]
    pub rotation: Vec3Decl,
    /// Scale factors
    #[serde(default = "unit_scale")]
    pub scale: Vec3Decl,
}

/// On-disk configured property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PropertyDecl {
    /// Text value
    Text(String),
    /// 3D vector value
    Vector(Vec3Decl),
    /// Reference to another object in the same file, by name
    Object(String),
}

/// On-disk script attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptDecl {
    /// Registered behaviour name
    pub behaviour: String,
    /// Configured properties for this instance
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDecl>,
}

/// On-disk object declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDecl {
    /// Unique object name
    pub name: String,
    /// Transform, absent for objects without spatial state
    #[serde(default)]
    pub transform: Option<TransformDecl>,
    /// Declared material uniforms and their initial values
    #[serde(default)]
    pub uniforms: BTreeMap<String, Vec3Decl>,
    /// Script attachments
    #[serde(default)]
    pub scripts: Vec<ScriptDecl>,
}

/// On-disk scene: the file's root value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneFile {
    /// All objects in the scene, in spawn order
    pub objects: Vec<ObjectDecl>,
}

/// Build a scene from RON source
///
/// Objects are created first; script properties that reference objects by
/// name are resolved afterwards, so declaration order does not matter.
///
/// # Errors
/// Fails on malformed RON, duplicate object names, references to names not
/// in the file, and behaviour names missing from `registry`.
pub fn load_scene(source: &str, registry: &BehaviourRegistry) -> Result<Scene, SceneLoadError> {
    let file: SceneFile = ron::from_str(source)?;
    let mut scene = Scene::new();
    let mut names: HashMap<String, ObjectId> = HashMap::new();

    // Pass 1: objects and their data components.
    for decl in &file.objects {
        if names.contains_key(&decl.name) {
            return Err(SceneLoadError::DuplicateObject(decl.name.clone()));
        }

        let id = match &decl.transform {
            Some(transform) => {
                let id = scene.spawn(decl.name.as_str());
                if let Some(object) = scene.object_mut(id) {
                    object.set_transform(TransformComponent::from_parts(
                        transform.position.into(),
                        transform.rotation.into(),
                        transform.scale.into(),
                    ));
                }
                id
            }
            None => scene.spawn_empty(decl.name.as_str()),
        };

        if !decl.uniforms.is_empty() {
            let mut material = MaterialComponent::new();
            for (name, value) in &decl.uniforms {
                material.declare_uniform(name.as_str(), (*value).into());
            }
            if let Some(object) = scene.object_mut(id) {
                object.set_material(material);
            }
        }

        names.insert(decl.name.clone(), id);
    }

    // Pass 2: scripts, now that every referenced object exists.
    for decl in &file.objects {
        let id = names[&decl.name];
        for script in &decl.scripts {
            let behaviour = registry.instantiate(&script.behaviour).ok_or_else(|| {
                SceneLoadError::UnknownBehaviour {
                    object: decl.name.clone(),
                    behaviour: script.behaviour.clone(),
                }
            })?;

            let mut properties = PropertySheet::new();
            for (name, value) in &script.properties {
                let value = match value {
                    PropertyDecl::Text(text) => PropertyValue::Text(text.clone()),
                    PropertyDecl::Vector(vector) => PropertyValue::Vector((*vector).into()),
                    PropertyDecl::Object(target) => {
                        let target_id = names.get(target).copied().ok_or_else(|| {
                            SceneLoadError::UnknownObject {
                                object: decl.name.clone(),
                                target: target.clone(),
                            }
                        })?;
                        PropertyValue::Object(ObjectRef::to(target_id))
                    }
                };
                properties.insert(name.as_str(), value);
            }

            scene.attach_behaviour(id, script.behaviour.as_str(), behaviour, properties);
        }
    }

    Ok(scene)
}

/// Load a scene from a RON file on disk
///
/// # Errors
/// See [`load_scene`]; additionally fails if the file cannot be read.
pub fn load_scene_file(
    path: impl AsRef<Path>,
    registry: &BehaviourRegistry,
) -> Result<Scene, SceneLoadError> {
    let source = std::fs::read_to_string(path)?;
    load_scene(&source, registry)
}

/// Serialize a scene to RON
///
/// Object-reference properties whose target is unset or destroyed are
/// omitted; they load back as unset.
///
/// # Errors
/// Fails only if serialization itself fails.
pub fn save_scene(scene: &Scene) -> Result<String, SceneLoadError> {
    let mut file = SceneFile::default();

    for (_, object) in scene.iter() {
        let mut decl = ObjectDecl {
            name: object.name().to_owned(),
            transform: object.transform().map(|transform| TransformDecl {
                position: transform.position().into(),
                rotation: transform.rotation().into(),
                scale: transform.scale().into(),
            }),
            uniforms: BTreeMap::new(),
            scripts: Vec::new(),
        };

        if let Some(material) = object.material() {
            for (name, value) in material.uniforms() {
                decl.uniforms.insert(name.to_owned(), value.into());
            }
        }

        if let Some(script) = object.script() {
            for (behaviour, properties) in script.attachments() {
                let mut script_decl = ScriptDecl {
                    behaviour: behaviour.to_owned(),
                    properties: BTreeMap::new(),
                };
                for (name, value) in properties.iter() {
                    let value = match value {
                        PropertyValue::Text(text) => PropertyDecl::Text(text.clone()),
                        PropertyValue::Vector(vector) => PropertyDecl::Vector((*vector).into()),
                        PropertyValue::Object(reference) => {
                            let Some(target) = reference
                                .target()
                                .and_then(|target_id| scene.object(target_id))
                            else {
                                continue;
                            };
                            PropertyDecl::Object(target.name().to_owned())
                        }
                    };
                    script_decl.properties.insert(name.to_owned(), value);
                }
                decl.scripts.push(script_decl);
            }
        }

        file.objects.push(decl);
    }

    Ok(ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::new())?)
}
