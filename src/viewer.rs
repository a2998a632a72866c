//! Standalone window that drives a camera from live input.
//!
//! No drawing happens here: the window exists to deliver real input events
//! to an [`AppContext`], and the camera pose is logged each frame at `trace`
//! level.
//!
//! ```no_run
//! # use freelook::Viewer;
//! Viewer::builder()
//!     .with_title("Freelook")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::FreelookError, options::Options, AppContext, InputEvent,
    InputHandler,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.viewer.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window feeding input into a free-look camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the exit key is pressed.
    pub fn run(self) -> Result<(), FreelookError> {
        let event_loop = EventLoop::new()
            .map_err(|e| FreelookError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            context: AppContext::new(&self.options),
            options: self.options,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FreelookError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    context: AppContext,
    options: Options,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let viewer = &self.options.viewer;
        let attrs = Window::default_attributes()
            .with_title(viewer.title.clone())
            .with_inner_size(LogicalSize::new(viewer.width, viewer.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.context.resized(size.width, size.height);
                log::info!("opened {}x{} window", size.width, size.height);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                if self.context.should_render() {
                    let _ = self.context.tick();
                }
            }

            other => {
                if let Some(input) = InputEvent::from_window_event(&other) {
                    self.context.handle_event(&input);
                }
            }
        }

        if self.context.exit_requested() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
