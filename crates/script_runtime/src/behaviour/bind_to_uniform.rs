//! Position-to-uniform binding behaviour

use super::{Behaviour, PropertySheet, ScriptContext, ScriptError};
use crate::scene::ObjectRef;

/// Copies a target object's position into a named material uniform
///
/// Every frame, if the target reference resolves to a live object and the
/// uniform name is non-empty, the target's transform position is written to
/// the uniform of that name on the owning object's material. The write only
/// happens when the material already declares the uniform; nothing is ever
/// created implicitly.
///
/// Configured properties: `uniform_name` (text, default `"ta"`), `target`
/// (object reference, default unset).
#[derive(Debug)]
pub struct UniformBinder {
    uniform_name: String,
    target: ObjectRef,
}

impl UniformBinder {
    /// Registry name of this behaviour
    pub const NAME: &'static str = "BindToUniform";

    /// Default uniform name
    pub const DEFAULT_UNIFORM: &'static str = "ta";

    /// Create a binder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            uniform_name: Self::DEFAULT_UNIFORM.to_owned(),
            target: ObjectRef::none(),
        }
    }
}

impl Default for UniformBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour for UniformBinder {
    fn start(
        &mut self,
        properties: &PropertySheet,
        _ctx: &mut ScriptContext<'_>,
    ) -> Result<(), ScriptError> {
        self.uniform_name = properties.text("uniform_name", Self::DEFAULT_UNIFORM);
        self.target = properties.object("target");
        Ok(())
    }

    fn update(&mut self, ctx: &mut ScriptContext<'_>, _delta_time: f32) -> Result<(), ScriptError> {
        if self.uniform_name.is_empty() {
            return Ok(());
        }
        let Some(target) = ctx.resolve(self.target) else {
            return Ok(());
        };

        let position = ctx.transform_of(target)?.position();

        let material = ctx.material()?;
        if material.has_uniform(&self.uniform_name) {
            material.set_uniform(&self.uniform_name, position);
            log::debug!(
                "uniform `{}` <- ({}, {}, {})",
                self.uniform_name,
                position.x,
                position.y,
                position.z
            );
        }

        Ok(())
    }
}
