//! Orbit demo application
//!
//! Headless demonstration of the scripting runtime: a satellite orbits a
//! center object while binding its position into a material uniform, and
//! the center object spins at a constant rate. Runs a fixed-step frame loop
//! and logs the scene state once per simulated second.

use script_runtime::prelude::*;

const FIXED_DELTA: f32 = 1.0 / 60.0;
const SIMULATED_FRAMES: u32 = 600;

fn build_scene() -> (Scene, ObjectId, ObjectId) {
    let mut scene = Scene::new();

    let sun = scene.spawn_at("sun", Vec3::new(100.0, 0.0, 0.0));
    let satellite = scene.spawn("satellite");

    if let Some(object) = scene.object_mut(satellite) {
        object.set_material(MaterialComponent::new().with_uniform("ta", Vec3::zeros()));
    }

    scene.attach_behaviour(
        satellite,
        Orbiter::NAME,
        Box::new(Orbiter::new()),
        PropertySheet::new().with_object("center", ObjectRef::to(sun)),
    );
    scene.attach_behaviour(
        satellite,
        UniformBinder::NAME,
        Box::new(UniformBinder::new()),
        PropertySheet::new().with_object("target", ObjectRef::to(sun)),
    );
    scene.attach_behaviour(
        sun,
        Rotator::NAME,
        Box::new(Rotator::new()),
        PropertySheet::new(),
    );

    (scene, sun, satellite)
}

fn log_state(scene: &Scene, sun: ObjectId, satellite: ObjectId, second: u32) {
    let Some(sun_object) = scene.object(sun) else {
        return;
    };
    let Some(satellite_object) = scene.object(satellite) else {
        return;
    };

    if let (Some(sun_transform), Some(sat_transform)) =
        (sun_object.transform(), satellite_object.transform())
    {
        let rotation = sun_transform.rotation();
        let position = sat_transform.position();
        log::info!(
            "t={second}s  sun rotation.z={:.3} rad  satellite at ({:.2}, {:.2}, {:.2})",
            rotation.z,
            position.x,
            position.y,
            position.z
        );
    }

    if let Some(material) = satellite_object.material() {
        if let Some(value) = material.uniform("ta") {
            log::debug!("t={second}s  uniform ta=({}, {}, {})", value.x, value.y, value.z);
        }
    }
}

fn main() {
    script_runtime::foundation::logging::init();

    log::info!("building demo scene");
    let (mut scene, sun, satellite) = build_scene();

    let mut clock = FrameClock::new();
    for frame in 0..SIMULATED_FRAMES {
        clock.tick_fixed(FIXED_DELTA);
        scene.update(FIXED_DELTA);

        if frame % 60 == 0 {
            log_state(&scene, sun, satellite, frame / 60);
        }
    }

    log::info!(
        "done after {} frames ({:.1}s simulated)",
        clock.frame_count(),
        clock.total_time()
    );

    match save_scene(&scene) {
        Ok(snapshot) => log::debug!("final scene snapshot:\n{snapshot}"),
        Err(error) => log::warn!("could not serialize scene snapshot: {error}"),
    }
}
