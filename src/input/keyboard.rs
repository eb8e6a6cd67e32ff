use serde::{Deserialize, Serialize};

use crate::camera::Movement;

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// reset_camera = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction.
    MoveForward,
    /// Move against the view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Move along the world up vector.
    MoveUp,
    /// Move against the world up vector.
    MoveDown,
    /// Restore the initial camera pose.
    ResetCamera,
}

impl KeyAction {
    /// Camera movement applied while this key is held, if any.
    #[must_use]
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::MoveLeft => Some(Movement::Left),
            Self::MoveRight => Some(Movement::Right),
            Self::MoveUp => Some(Movement::Up),
            Self::MoveDown => Some(Movement::Down),
            Self::ResetCamera => None,
        }
    }
}
