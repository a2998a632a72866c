//! Small shared helpers.

/// Frame delta timing and FPS smoothing.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
