use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Construction-time camera parameters.
pub struct CameraOptions {
    /// World-space up reference. Fixed for the camera's lifetime.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Initial yaw in degrees. -90 looks down -Z.
    #[schemars(title = "Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Pointer delta multiplier (degrees per pixel).
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            world_up: [0.0, 1.0, 0.0],
            yaw: -90.0,
            pitch: 0.0,
            move_speed: 5.0,
            mouse_sensitivity: 0.1,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
