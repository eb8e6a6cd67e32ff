//! Applies input events to the orbit camera.
//!
//! The `InputProcessor` owns the transient keyboard state (which movement
//! keys are held) and the key-binding map. Pointer events go straight to the
//! camera's gesture handlers.

use super::event::InputEvent;
use crate::camera::{Movement, OrbitCamera};
use crate::input::KeyAction;
use crate::options::KeybindingOptions;

/// Routes [`InputEvent`]s to an [`OrbitCamera`].
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Movement keys currently held, in press order.
    held: Vec<Movement>,
}

impl InputProcessor {
    /// Processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            held: Vec::new(),
        }
    }

    /// Apply one event.
    pub fn handle_event(&mut self, event: &InputEvent, camera: &mut OrbitCamera) {
        match event {
            InputEvent::PointerDown { x, y } => camera.on_pointer_down(*x, *y),
            InputEvent::PointerMove { x, y } => camera.on_pointer_move(*x, *y),
            InputEvent::PointerUp => camera.on_pointer_up(),
            InputEvent::PointerCancel => camera.on_pointer_cancel(),
            InputEvent::FocusLost => {
                camera.on_pointer_cancel();
                self.release_all();
            }
            InputEvent::Key { code, pressed } => {
                self.handle_key(code, *pressed, camera);
            }
        }
    }

    fn handle_key(&mut self, code: &str, pressed: bool, camera: &mut OrbitCamera) {
        let Some(action) = self.key_bindings.lookup(code) else {
            log::trace!("unbound key {code}");
            return;
        };
        match (action.movement(), pressed) {
            (Some(movement), true) => {
                if !self.held.contains(&movement) {
                    self.held.push(movement);
                }
            }
            (Some(movement), false) => self.held.retain(|m| *m != movement),
            (None, true) if action == KeyAction::ResetCamera => {
                log::debug!("camera reset");
                camera.reset();
            }
            (None, _) => {}
        }
    }

    /// Nudge the camera once for every held movement key. Called once per
    /// tick, after the queued events are applied.
    pub fn apply_held(&self, camera: &mut OrbitCamera) {
        for movement in &self.held {
            camera.nudge(*movement);
        }
    }

    /// Movement keys currently held.
    #[must_use]
    pub fn held(&self) -> &[Movement] {
        &self.held
    }

    /// Forget held keys.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
