// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-look first-person camera for immediate-mode render loops.
//!
//! The camera keeps yaw/pitch angles and derives an orthonormal
//! `front`/`right`/`up` basis from them. Input events step it along that
//! basis, turn it, and zoom it; once per frame the render loop reads back a
//! view matrix and field of view.
//!
//! # Key entry points
//!
//! - [`Camera`] - orientation, position and zoom state
//! - [`AppContext`] - camera plus input/timing state, fed by window events
//! - [`InputProcessor`] / [`InputHandler`] - event → camera translation
//! - [`Options`] - TOML-backed configuration (camera, keybindings, viewer)
//!
//! # Example
//!
//! ```
//! use freelook::{Camera, CameraMovement};
//! use glam::{Vec2, Vec3};
//!
//! let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
//! camera.reorient(Vec2::new(400.0, 300.0), Vec2::new(450.0, 300.0));
//! camera.move_in(CameraMovement::Forward, 1.0 / 60.0);
//! camera.zoom(2.0);
//!
//! let view = camera.view_matrix();
//! let eye = view.transform_point3(camera.position());
//! assert!(eye.length() < 1e-4);
//! ```

pub mod camera;
pub mod context;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraMovement, CameraUniform};
pub use context::AppContext;
pub use error::FreelookError;
pub use input::{InputEvent, InputHandler, InputProcessor, KeyAction};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
