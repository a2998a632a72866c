use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
/// Window and frame-pacing parameters for the standalone viewer.
pub struct ViewerOptions {
    /// Initial window width in logical pixels.
    #[schemars(title = "Width", range(min = 64, max = 7680))]
    pub width: u32,
    /// Initial window height in logical pixels.
    #[schemars(title = "Height", range(min = 64, max = 4320))]
    pub height: u32,
    /// Window title.
    #[schemars(skip)]
    pub title: String,
    /// Camera eye position when the viewer starts.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Frame cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Freelook".into(),
            start_position: [0.0, 0.0, 3.0],
            target_fps: 0,
        }
    }
}
