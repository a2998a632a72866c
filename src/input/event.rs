/// Platform-agnostic input events.
///
/// These are delivered to an [`InputHandler`](super::InputHandler), usually
/// the [`AppContext`](crate::AppContext), which turns them into camera
/// updates.
///
/// # Example
///
/// ```
/// use freelook::{AppContext, InputEvent, InputHandler, Options};
///
/// let mut context = AppContext::new(&Options::default());
/// context.handle_event(&InputEvent::Scroll { delta: 5.0 });
/// assert_eq!(context.camera().fovy(), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Cursor left the window; the next position is treated as a fresh
    /// start rather than a jump.
    CursorLeft,
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key name in `winit::keyboard::KeyCode` debug format,
        /// e.g. `"KeyW"` or `"Escape"`.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Drawable area resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Window lost keyboard focus; held keys are released.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it is one the camera cares about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::CursorLeft { .. } => Some(Self::CursorLeft),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state.is_pressed(),
                })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}
