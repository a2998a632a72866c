//! Input handling: event types, key actions, and the input processor that
//! converts raw window events into camera updates.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Cursor position tracking.
pub(crate) mod mouse;
/// Converts raw events into camera updates.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{InputHandler, InputProcessor};
