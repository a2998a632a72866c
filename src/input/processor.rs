//! Converts platform events into camera updates.
//!
//! The `InputProcessor` owns all transient input state (last cursor
//! position, held movement keys) and the key-binding map. It sits between
//! raw window events and the [`Camera`], which itself keeps no pointer or
//! key state.

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::PointerTracker;
use crate::camera::{Camera, CameraMovement};
use crate::options::KeybindingOptions;

// ─────────────────────────────────────────────────────────────────────────────
// InputHandler
// ─────────────────────────────────────────────────────────────────────────────

/// Receiver for discrete input events, one method per event type.
///
/// Window integrations call these from their event callbacks; all calls are
/// expected on the same thread that renders.
pub trait InputHandler {
    /// Cursor moved to `(x, y)` in physical pixels.
    fn cursor_moved(&mut self, x: f32, y: f32);

    /// Cursor left the window.
    fn cursor_left(&mut self) {}

    /// Scroll wheel moved by `delta` (positive = zoom in).
    fn scroll(&mut self, delta: f32);

    /// Physical key `code` pressed or released.
    fn key(&mut self, code: &str, pressed: bool);

    /// Drawable area resized.
    fn resized(&mut self, _width: u32, _height: u32) {}

    /// Window lost keyboard focus.
    fn focus_lost(&mut self) {}

    /// Dispatch a platform-agnostic event to the matching method.
    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.cursor_moved(*x, *y),
            InputEvent::CursorLeft => self.cursor_left(),
            InputEvent::Scroll { delta } => self.scroll(*delta),
            InputEvent::Key { code, pressed } => self.key(code, *pressed),
            InputEvent::Resized { width, height } => {
                self.resized(*width, *height);
            }
            InputEvent::FocusLost => self.focus_lost(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Tracks pointer and keyboard state and applies it to a [`Camera`].
///
/// # Usage
///
/// ```
/// use freelook::{Camera, InputProcessor};
/// use glam::{Vec2, Vec3};
///
/// let mut camera = Camera::new(Vec3::ZERO);
/// let mut input = InputProcessor::new();
///
/// let _ = input.handle_key("KeyW", true);
/// input.apply_movement(&mut camera, 0.5);
/// assert!(camera.position().z < 0.0);
///
/// input.handle_cursor_moved(&mut camera, Vec2::new(400.0, 300.0));
/// input.handle_cursor_moved(&mut camera, Vec2::new(420.0, 300.0));
/// assert!(camera.yaw() > -90.0);
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Last cursor position.
    pointer: PointerTracker,
    /// Movement directions whose keys are currently down.
    held: HashSet<CameraMovement>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            pointer: PointerTracker::default(),
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Last cursor position in physical pixels, if one has been seen.
    #[must_use]
    pub fn cursor_pos(&self) -> Option<Vec2> {
        self.pointer.last()
    }

    /// Whether the key for `movement` is currently held.
    #[must_use]
    pub fn is_held(&self, movement: CameraMovement) -> bool {
        self.held.contains(&movement)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Cursor moved: reorient the camera by the motion since the previous
    /// position. The first position seen only primes the tracker.
    pub fn handle_cursor_moved(&mut self, camera: &mut Camera, current: Vec2) {
        if let Some((previous, current)) = self.pointer.advance(current) {
            camera.reorient(previous, current);
        }
    }

    /// Cursor left the window: the next position starts fresh.
    pub fn handle_cursor_left(&mut self) {
        self.pointer.reset();
    }

    /// Key press/release. Movement keys are tracked as held until released.
    ///
    /// Returns the bound action on press, `None` on release or for unbound
    /// keys.
    pub fn handle_key(&mut self, code: &str, pressed: bool) -> Option<KeyAction> {
        let action = self.key_bindings.lookup(code)?;
        log::debug!("key {code} -> {action:?} (pressed: {pressed})");

        if let Some(movement) = action.movement() {
            if pressed {
                let _ = self.held.insert(movement);
            } else {
                let _ = self.held.remove(&movement);
            }
        }

        pressed.then_some(action)
    }

    /// Release every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Step the camera for every held movement key.
    pub fn apply_movement(&self, camera: &mut Camera, elapsed_secs: f32) {
        for movement in CameraMovement::ALL {
            if self.held.contains(&movement) {
                camera.move_in(movement, elapsed_secs);
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
