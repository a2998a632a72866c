//! Application context shared by input callbacks and the render loop.
//!
//! Everything a render loop would otherwise keep in globals (the camera,
//! last cursor position, frame timing, viewport size) lives here and is
//! passed explicitly to whoever handles events.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, CameraUniform};
use crate::input::{InputHandler, InputProcessor, KeyAction};
use crate::options::Options;
use crate::util::FrameTiming;

/// Owns the camera and all per-run input/timing state.
///
/// Implements [`InputHandler`], so window callbacks can forward events to
/// it directly.
#[derive(Debug)]
pub struct AppContext {
    camera: Camera,
    input: InputProcessor,
    timing: FrameTiming,
    uniform: CameraUniform,
    viewport: (u32, u32),
    exit_requested: bool,
}

impl AppContext {
    /// Build a context from options. The camera starts at
    /// `options.viewer.start_position`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let position = Vec3::from_array(options.viewer.start_position);
        let camera = Camera::with_options(position, &options.camera);
        let viewport = (options.viewer.width, options.viewer.height);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, aspect_ratio(viewport));

        Self {
            camera,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            timing: FrameTiming::new(options.viewer.target_fps),
            uniform,
            viewport,
            exit_requested: false,
        }
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Frame timing state.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Current viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Viewport width / height, 1.0 while the viewport is degenerate
    /// (e.g. a minimized window).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.viewport)
    }

    /// Whether an exit key has been pressed.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Latest uniform block produced by [`frame`](Self::frame).
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Whether the frame cap allows rendering now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.timing.should_render()
    }

    /// Advance one frame using the wall-clock time since the previous one.
    pub fn tick(&mut self) -> &CameraUniform {
        let elapsed_secs = self.timing.tick();
        self.frame(elapsed_secs)
    }

    /// Advance one frame of `elapsed_secs`: step the camera for held
    /// movement keys and refresh the uniform block.
    pub fn frame(&mut self, elapsed_secs: f32) -> &CameraUniform {
        self.input.apply_movement(&mut self.camera, elapsed_secs);
        self.uniform.update(&self.camera, aspect_ratio(self.viewport));
        log::trace!(
            "camera at {} looking {} (fovy {:.1})",
            self.camera.position(),
            self.camera.front(),
            self.camera.fovy()
        );
        &self.uniform
    }
}

impl InputHandler for AppContext {
    fn cursor_moved(&mut self, x: f32, y: f32) {
        self.input
            .handle_cursor_moved(&mut self.camera, Vec2::new(x, y));
    }

    fn cursor_left(&mut self) {
        self.input.handle_cursor_left();
    }

    fn scroll(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    fn key(&mut self, code: &str, pressed: bool) {
        if self.input.handle_key(code, pressed) == Some(KeyAction::Exit) {
            log::debug!("exit requested via {code}");
            self.exit_requested = true;
        }
    }

    fn resized(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    fn focus_lost(&mut self) {
        self.input.release_all();
    }
}

fn aspect_ratio((width, height): (u32, u32)) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
