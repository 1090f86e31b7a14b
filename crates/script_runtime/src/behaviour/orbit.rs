//! Circular orbit behaviour

use super::{Behaviour, PropertySheet, ScriptContext, ScriptError};
use crate::foundation::math::Vec3;
use crate::scene::ObjectRef;

/// Orbit radius in world units
const ORBIT_RADIUS: f32 = 10.0;

/// Angular speed in radians per second (negated per frame, so clockwise)
const ANGULAR_SPEED: f32 = 2.0;

/// Moves the owning object on a circle in the X-Z plane
///
/// The circle is centered on `center position + offset` when the configured
/// center reference resolves to a live object, or on `offset` alone when it
/// is unset or dead. Y stays pinned to the base point's Y.
///
/// Configured properties: `center` (object reference, default unset),
/// `offset` (vector, default `(0, 5, 0)`).
#[derive(Debug)]
pub struct Orbiter {
    center: ObjectRef,
    offset: Vec3,
    elapsed: f32,
}

impl Orbiter {
    /// Registry name of this behaviour
    pub const NAME: &'static str = "Circle";

    /// Default offset from the center object
    #[must_use]
    pub fn default_offset() -> Vec3 {
        Vec3::new(0.0, 5.0, 0.0)
    }

    /// Create an orbiter with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            center: ObjectRef::none(),
            offset: Self::default_offset(),
            elapsed: 0.0,
        }
    }
}

impl Default for Orbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour for Orbiter {
    fn start(
        &mut self,
        properties: &PropertySheet,
        _ctx: &mut ScriptContext<'_>,
    ) -> Result<(), ScriptError> {
        self.center = properties.object("center");
        self.offset = properties.vector("offset", Self::default_offset());
        self.elapsed = 0.0;
        Ok(())
    }

    fn update(&mut self, ctx: &mut ScriptContext<'_>, delta_time: f32) -> Result<(), ScriptError> {
        self.elapsed += delta_time;

        // Re-resolved every frame; a destroyed center degrades to offset-only.
        let base = match ctx.resolve(self.center) {
            Some(center) => ctx.transform_of(center)?.position() + self.offset,
            None => self.offset,
        };

        let angle = -self.elapsed * ANGULAR_SPEED;
        let position = Vec3::new(
            base.x + angle.cos() * ORBIT_RADIUS,
            base.y,
            base.z + angle.sin() * ORBIT_RADIUS,
        );
        ctx.transform()?.set_position(position);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ObjectId, Scene};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn run(scene: &mut Scene, orbiter: &mut Orbiter, object: ObjectId, dt: f32) {
        let mut ctx = ScriptContext::new(scene, object);
        orbiter.update(&mut ctx, dt).unwrap();
    }

    fn position_of(scene: &Scene, object: ObjectId) -> Vec3 {
        scene.object(object).unwrap().transform().unwrap().position()
    }

    #[test]
    fn test_orbit_without_center_starts_on_positive_x() {
        let mut scene = Scene::new();
        let object = scene.spawn("satellite");
        let mut orbiter = Orbiter::new();

        // t = 0: argument is 0, so cos = 1, sin = 0
        run(&mut scene, &mut orbiter, object, 0.0);

        let position = position_of(&scene, object);
        assert_relative_eq!(position.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(position.y, 5.0, epsilon = 1e-5);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_orbit_without_center_at_half_pi() {
        let mut scene = Scene::new();
        let object = scene.spawn("satellite");
        let mut orbiter = Orbiter::new();

        // t = pi/2: argument is -pi, so cos = -1, sin = 0
        run(&mut scene, &mut orbiter, object, FRAC_PI_2);

        let position = position_of(&scene, object);
        assert_relative_eq!(position.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(position.y, 5.0, epsilon = 1e-5);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_orbit_around_center_object() {
        let mut scene = Scene::new();
        let center = scene.spawn_at("center", Vec3::new(100.0, 0.0, 0.0));
        let object = scene.spawn("satellite");

        let mut orbiter = Orbiter::new();
        {
            let props = PropertySheet::new().with_object("center", ObjectRef::to(center));
            let mut ctx = ScriptContext::new(&mut scene, object);
            orbiter.start(&props, &mut ctx).unwrap();
        }

        run(&mut scene, &mut orbiter, object, 0.0);

        // base = (100, 0, 0) + (0, 5, 0)
        let position = position_of(&scene, object);
        assert_relative_eq!(position.x, 110.0, epsilon = 1e-4);
        assert_relative_eq!(position.y, 5.0, epsilon = 1e-5);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-4);

        // The orbit point always sits on a radius-10 circle around the base
        run(&mut scene, &mut orbiter, object, 0.37);
        let position = position_of(&scene, object);
        let base = Vec3::new(100.0, 5.0, 0.0);
        let planar = Vec3::new(position.x - base.x, 0.0, position.z - base.z);
        assert_relative_eq!(planar.magnitude(), 10.0, epsilon = 1e-4);
        assert_relative_eq!(position.y, base.y, epsilon = 1e-5);
    }

    #[test]
    fn test_destroyed_center_degrades_to_offset() {
        let mut scene = Scene::new();
        let center = scene.spawn_at("center", Vec3::new(100.0, 0.0, 0.0));
        let object = scene.spawn("satellite");

        let mut orbiter = Orbiter::new();
        {
            let props = PropertySheet::new().with_object("center", ObjectRef::to(center));
            let mut ctx = ScriptContext::new(&mut scene, object);
            orbiter.start(&props, &mut ctx).unwrap();
        }

        scene.despawn(center);
        run(&mut scene, &mut orbiter, object, 0.0);

        // Same as the no-center case: base is the bare offset
        let position = position_of(&scene, object);
        assert_relative_eq!(position.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(position.y, 5.0, epsilon = 1e-5);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_delta_is_idempotent() {
        let mut scene = Scene::new();
        let object = scene.spawn("satellite");
        let mut orbiter = Orbiter::new();

        run(&mut scene, &mut orbiter, object, 0.8);
        let before = position_of(&scene, object);

        run(&mut scene, &mut orbiter, object, 0.0);
        let after = position_of(&scene, object);

        assert_eq!(before, after);
    }
}
