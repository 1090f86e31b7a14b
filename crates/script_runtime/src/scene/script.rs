//! Script component: behaviours attached to a scene object
//!
//! Each attached behaviour is started lazily before its first update and
//! then updated once per frame. A failing behaviour is logged with its name
//! and skipped for that frame; the remaining behaviours still run, matching
//! how the original host isolates script errors per script.

use crate::behaviour::{Behaviour, PropertySheet, ScriptContext};
use crate::scene::{ObjectId, Scene};
use std::fmt;

struct ScriptSlot {
    name: String,
    behaviour: Box<dyn Behaviour>,
    properties: PropertySheet,
    started: bool,
}

/// Behaviours attached to one scene object
#[derive(Default)]
pub struct ScriptComponent {
    slots: Vec<ScriptSlot>,
}

impl ScriptComponent {
    /// Create a script component with no behaviours
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a behaviour under a name, with its configured properties
    ///
    /// The behaviour's `start` runs before its first update, not here.
    pub fn attach(
        &mut self,
        name: impl Into<String>,
        behaviour: Box<dyn Behaviour>,
        properties: PropertySheet,
    ) {
        self.slots.push(ScriptSlot {
            name: name.into(),
            behaviour,
            properties,
            started: false,
        });
    }

    /// Names and property sheets of the attached behaviours, in attach order
    pub fn attachments(&self) -> impl Iterator<Item = (&str, &PropertySheet)> {
        self.slots
            .iter()
            .map(|slot| (slot.name.as_str(), &slot.properties))
    }

    /// Number of attached behaviours
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no behaviours are attached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Run one frame of every attached behaviour
    ///
    /// `owner` is the object this component was taken from; the component is
    /// detached from the scene while running so behaviours can borrow the
    /// scene mutably.
    pub(crate) fn run(&mut self, scene: &mut Scene, owner: ObjectId, delta_time: f32) {
        for slot in &mut self.slots {
            let mut ctx = ScriptContext::new(scene, owner);

            if !slot.started {
                slot.started = true;
                if let Err(error) = slot.behaviour.start(&slot.properties, &mut ctx) {
                    log::error!("script error in `{}` (start): {error}", slot.name);
                    continue;
                }
            }

            if let Err(error) = slot.behaviour.update(&mut ctx, delta_time) {
                log::error!("script error in `{}` (update): {error}", slot.name);
            }
        }
    }
}

impl fmt::Debug for ScriptComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| &slot.name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviour::ScriptError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counter {
        starts: Arc<AtomicUsize>,
        updates: Arc<AtomicUsize>,
    }

    impl Behaviour for Counter {
        fn start(
            &mut self,
            _properties: &PropertySheet,
            _ctx: &mut ScriptContext<'_>,
        ) -> Result<(), ScriptError> {
            self.starts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn update(
            &mut self,
            _ctx: &mut ScriptContext<'_>,
            _delta_time: f32,
        ) -> Result<(), ScriptError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Always fails: its owner has no transform to speak of
    struct NeedsTransform;

    impl Behaviour for NeedsTransform {
        fn update(
            &mut self,
            ctx: &mut ScriptContext<'_>,
            _delta_time: f32,
        ) -> Result<(), ScriptError> {
            ctx.transform()?;
            Ok(())
        }
    }

    #[test]
    fn test_start_runs_exactly_once() {
        let starts = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));

        let mut scene = Scene::new();
        let object = scene.spawn("counted");
        scene.attach_behaviour(
            object,
            "Counter",
            Box::new(Counter {
                starts: Arc::clone(&starts),
                updates: Arc::clone(&updates),
            }),
            PropertySheet::new(),
        );

        for _ in 0..5 {
            scene.update(0.016);
        }

        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(updates.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_failing_behaviour_does_not_block_others() {
        let starts = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));

        let mut scene = Scene::new();
        // No transform: NeedsTransform fails every frame.
        let object = scene.spawn_empty("bare");
        scene.attach_behaviour(object, "NeedsTransform", Box::new(NeedsTransform), PropertySheet::new());
        scene.attach_behaviour(
            object,
            "Counter",
            Box::new(Counter {
                starts: Arc::clone(&starts),
                updates: Arc::clone(&updates),
            }),
            PropertySheet::new(),
        );

        scene.update(0.016);
        scene.update(0.016);

        assert_eq!(updates.load(Ordering::SeqCst), 2);
    }
}
