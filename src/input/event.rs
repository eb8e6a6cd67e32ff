/// Platform-agnostic input events.
///
/// Pointer coordinates are canvas-local pixels. Events are pushed through an
/// [`InputSender`](super::InputSender) and applied to the camera at the start
/// of the next tick by an [`InputProcessor`](super::InputProcessor).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button or first touch went down.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer moved.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Primary button or first touch released.
    PointerUp,
    /// The gesture was interrupted (touch cancel).
    PointerCancel,
    /// The window lost focus: the gesture ends and held keys are released,
    /// since their key-up events will never arrive.
    FocusLost,
    /// Keyboard key changed state.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowUp"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

impl InputEvent {
    /// Key press event.
    pub fn key_down(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            pressed: true,
        }
    }

    /// Key release event.
    pub fn key_up(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            pressed: false,
        }
    }
}
