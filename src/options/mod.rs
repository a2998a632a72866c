//! Centralized camera and viewer options with TOML preset support.
//!
//! Camera construction parameters, keybindings and viewer window settings
//! are consolidated here. Options serialize to/from TOML so a run can be
//! configured from a file.

mod camera;
mod keybindings;
mod viewer;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::error::FreelookError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera construction parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Standalone viewer window parameters.
    pub viewer: ViewerOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FreelookError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FreelookError> {
        let content = std::fs::read_to_string(path).map_err(FreelookError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FreelookError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FreelookError::Io)?;
        }
        std::fs::write(path, content).map_err(FreelookError::Io)
    }
}
