//! Conversion from winit window events.
//!
//! Only the left mouse button and the first active touch point drive the
//! pointer; keys are reported by physical key code.

use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::InputEvent;

/// Stateful translator from [`WindowEvent`] to [`InputEvent`].
///
/// Tracks the cursor (mouse presses carry no position) and which touch id
/// owns the gesture.
#[derive(Debug, Default)]
pub struct WinitInputAdapter {
    cursor: (f32, f32),
    touch: Option<u64>,
}

impl WinitInputAdapter {
    /// Adapter with the cursor at the origin and no active touch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event, or `None` if it is not camera input.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerDown {
                    x: self.cursor.0,
                    y: self.cursor.1,
                },
                ElementState::Released => InputEvent::PointerUp,
            }),
            WindowEvent::Touch(touch) => {
                let (x, y) = (touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started if self.touch.is_none() => {
                        self.touch = Some(touch.id);
                        Some(InputEvent::PointerDown { x, y })
                    }
                    TouchPhase::Moved if self.touch == Some(touch.id) => {
                        Some(InputEvent::PointerMove { x, y })
                    }
                    TouchPhase::Ended if self.touch == Some(touch.id) => {
                        self.touch = None;
                        Some(InputEvent::PointerUp)
                    }
                    TouchPhase::Cancelled if self.touch == Some(touch.id) => {
                        self.touch = None;
                        Some(InputEvent::PointerCancel)
                    }
                    _ => None,
                }
            }
            WindowEvent::Focused(false) => {
                self.touch = None;
                Some(InputEvent::FocusLost)
            }
            WindowEvent::KeyboardInput { event, .. } => {
                key_event(event.physical_key, event.state, event.repeat)
            }
            _ => None,
        }
    }
}

/// Key press or release by physical code. Auto-repeats are dropped: held
/// keys are tracked by the processor.
fn key_event(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    if repeat {
        return None;
    }
    Some(InputEvent::Key {
        code: format!("{code:?}"),
        pressed: state == ElementState::Pressed,
    })
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, Touch};
    use winit::keyboard::{KeyCode, NativeKeyCode};

    use super::*;

    fn device() -> DeviceId {
        // SAFETY: only compared against other dummy ids, never passed to
        // the platform.
        unsafe { DeviceId::dummy() }
    }

    fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> WindowEvent {
        WindowEvent::Touch(Touch {
            device_id: device(),
            phase,
            location: PhysicalPosition::new(x, y),
            force: None,
            id,
        })
    }

    #[test]
    fn mouse_press_uses_last_cursor_position() {
        let mut adapter = WinitInputAdapter::new();
        let moved = adapter.translate(&WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(12.0, 34.0),
        });
        assert_eq!(moved, Some(InputEvent::PointerMove { x: 12.0, y: 34.0 }));

        let press = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert_eq!(
            adapter.translate(&press),
            Some(InputEvent::PointerDown { x: 12.0, y: 34.0 })
        );

        let right = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        };
        assert_eq!(adapter.translate(&right), None);
    }

    #[test]
    fn first_touch_owns_the_gesture() {
        let mut adapter = WinitInputAdapter::new();
        assert_eq!(
            adapter.translate(&touch(1, TouchPhase::Started, 5.0, 6.0)),
            Some(InputEvent::PointerDown { x: 5.0, y: 6.0 })
        );
        // A second finger is ignored for its whole lifetime.
        assert_eq!(adapter.translate(&touch(2, TouchPhase::Started, 50.0, 60.0)), None);
        assert_eq!(adapter.translate(&touch(2, TouchPhase::Moved, 51.0, 60.0)), None);
        assert_eq!(adapter.translate(&touch(2, TouchPhase::Ended, 51.0, 60.0)), None);

        assert_eq!(
            adapter.translate(&touch(1, TouchPhase::Moved, 7.0, 6.0)),
            Some(InputEvent::PointerMove { x: 7.0, y: 6.0 })
        );
        assert_eq!(
            adapter.translate(&touch(1, TouchPhase::Ended, 7.0, 6.0)),
            Some(InputEvent::PointerUp)
        );
        // Ownership is free again.
        assert_eq!(
            adapter.translate(&touch(2, TouchPhase::Started, 1.0, 1.0)),
            Some(InputEvent::PointerDown { x: 1.0, y: 1.0 })
        );
        assert_eq!(
            adapter.translate(&touch(2, TouchPhase::Cancelled, 1.0, 1.0)),
            Some(InputEvent::PointerCancel)
        );
    }

    #[test]
    fn focus_loss_ends_touch_and_reports_focus_lost() {
        let mut adapter = WinitInputAdapter::new();
        let _ = adapter.translate(&touch(3, TouchPhase::Started, 0.0, 0.0));
        assert_eq!(
            adapter.translate(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(adapter.translate(&WindowEvent::Focused(true)), None);
        // The old touch no longer owns the gesture.
        assert_eq!(adapter.translate(&touch(3, TouchPhase::Moved, 1.0, 0.0)), None);
        assert!(adapter
            .translate(&touch(4, TouchPhase::Started, 0.0, 0.0))
            .is_some());
    }

    #[test]
    fn key_repeats_are_filtered() {
        let key = PhysicalKey::Code(KeyCode::KeyW);
        assert_eq!(
            key_event(key, ElementState::Pressed, false),
            Some(InputEvent::key_down("KeyW"))
        );
        assert_eq!(key_event(key, ElementState::Pressed, true), None);
        assert_eq!(
            key_event(key, ElementState::Released, false),
            Some(InputEvent::key_up("KeyW"))
        );
        let unknown = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);
        assert_eq!(key_event(unknown, ElementState::Pressed, false), None);
    }
}
