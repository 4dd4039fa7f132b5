//! Start-up configuration with TOML file support.
//!
//! Window size, projection constants, drag sensitivity, initial scene
//! layout, lights and key bindings are consolidated here. Options
//! serialize to/from TOML; every section is optional in the file.

mod camera;
mod display;
mod keybindings;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::{DisplayOptions, ShadingMode};
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SkyviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Window and output settings.
    pub display: DisplayOptions,
    /// Projection and drag sensitivity.
    pub camera: CameraOptions,
    /// Initial scene layout and colours.
    pub scene: SceneOptions,
    /// Light positions.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, SkyviewError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| SkyviewError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::Io`] if the file cannot be read, or
    /// [`SkyviewError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, SkyviewError> {
        let content = std::fs::read_to_string(path).map_err(SkyviewError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::OptionsParse`] if serialization fails, or
    /// [`SkyviewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SkyviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SkyviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SkyviewError::Io)?;
        }
        std::fs::write(path, content).map_err(SkyviewError::Io)
    }

    /// Write the JSON Schema of the options file.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::OptionsParse`] if serialization fails, or
    /// [`SkyviewError::Io`] if the file cannot be written.
    pub fn write_schema(path: &Path) -> Result<(), SkyviewError> {
        let content = serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| SkyviewError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(SkyviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
min_fovy = 45.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.min_fovy, 45.0);
        // Everything else should be default
        assert_eq!(opts.camera.znear, -0.1);
        assert_eq!(opts.camera.zfar, -50.0);
        assert_eq!(opts.display.width, 512);
        assert_eq!(opts.scene.camera_position, [0.0, 0.25, 4.0]);
        assert_eq!(opts.display.shading, ShadingMode::Solid);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml_str("[camera\nmin_fovy = ").unwrap_err();
        assert!(matches!(err, SkyviewError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyV"), Some(KeyAction::CycleView));
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::CycleEditTarget)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_from_toml_updates_lookup() {
        let toml_str = r#"
[keybindings.bindings]
cycle_view = "KeyC"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyC"), Some(KeyAction::CycleView));
        assert_eq!(opts.keybindings.lookup("KeyV"), None);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("skyview-options-test");
        let path = dir.join("options.toml");
        let mut opts = Options::default();
        opts.display.width = 800;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.display.width, 800);
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("lighting"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("min_fovy").is_some());
        assert!(camera.get("translate_speed").is_some());
    }
}
