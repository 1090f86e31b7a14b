//! Constant-rate rotation behaviour

use super::{Behaviour, PropertySheet, ScriptContext, ScriptError};
use crate::foundation::math::{radians, Vec3};

/// Rotation rate about the Z axis in degrees per second
const DEGREES_PER_SECOND: f32 = 45.0;

/// Rotates the owning object about the Z axis at a constant rate
///
/// The rotation accumulates without wraparound: after `t` seconds the
/// transform's rotation is `(0, 0, 45°·t)` in radians.
#[derive(Debug, Default)]
pub struct Rotator {
    elapsed: f32,
}

impl Rotator {
    /// Registry name of this behaviour
    pub const NAME: &'static str = "Rotate";

    /// Create a rotator with a zeroed time accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behaviour for Rotator {
    fn start(
        &mut self,
        _properties: &PropertySheet,
        _ctx: &mut ScriptContext<'_>,
    ) -> Result<(), ScriptError> {
        self.elapsed = 0.0;
        Ok(())
    }

    fn update(&mut self, ctx: &mut ScriptContext<'_>, delta_time: f32) -> Result<(), ScriptError> {
        self.elapsed += delta_time;

        let angle = radians(DEGREES_PER_SECOND) * self.elapsed;
        ctx.transform()?.set_rotation(Vec3::new(0.0, 0.0, angle));

        Ok(())
    }
}
