//! Free-look camera.
//!
//! Provides a first-person camera oriented by yaw/pitch angles, with
//! keyboard stepping, pointer-driven reorientation, scroll zoom and
//! view/projection matrix derivation.

/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::{
    Camera, CameraMovement, CameraUniform, MAX_FOVY, MIN_FOVY, PITCH_LIMIT,
};
