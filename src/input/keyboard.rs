use serde::{Deserialize, Serialize};

use crate::camera::CameraMovement;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// exit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Step along the look direction while held.
    MoveForward,
    /// Step against the look direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Close the application.
    Exit,
}

impl KeyAction {
    /// Camera movement driven by this action, if it is a held action.
    #[must_use]
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Self::MoveForward => Some(CameraMovement::Forward),
            Self::MoveBackward => Some(CameraMovement::Backward),
            Self::MoveLeft => Some(CameraMovement::Left),
            Self::MoveRight => Some(CameraMovement::Right),
            Self::Exit => None,
        }
    }
}
