//! Centralized simulation options with TOML preset support.
//!
//! Camera behaviour, mesh detail, scene unit conversions and keybindings are
//! consolidated here. Options serialize to/from TOML so a run can be
//! reproduced from a preset file.

mod camera;
mod geometry;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::{CameraOptions, QuatCombine};
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Mesh tessellation detail.
    pub geometry: GeometryOptions,
    /// Body table unit conversions.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Return a copy with `section.field` replaced by `value`, round-tripping
    /// through JSON so the same field names as the TOML presets apply.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, OrreryError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        let Some(slot) = root
            .get_mut(section)
            .and_then(serde_json::Value::as_object_mut)
        else {
            return Err(OrreryError::OptionsParse(format!(
                "unknown options section {section:?}"
            )));
        };
        if !slot.contains_key(field) {
            return Err(OrreryError::OptionsParse(format!(
                "unknown option {section}.{field}"
            )));
        }
        let _ = slot.insert(field.to_owned(), value);
        let mut opts: Self = serde_json::from_value(root)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Apply a `section.field=value` override. The value is read as JSON
    /// and falls back to a plain string (so `combine=multiply` works).
    pub fn apply_override(&self, spec: &str) -> Result<Self, OrreryError> {
        let bad = || {
            OrreryError::OptionsParse(format!(
                "expected section.field=value, got {spec:?}"
            ))
        };
        let (path, raw) = spec.split_once('=').ok_or_else(bad)?;
        let (section, field) = path.split_once('.').ok_or_else(bad)?;
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()));
        self.with_field(section.trim(), field.trim(), value)
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
        assert_eq!(
            parsed.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
sensitivity = 0.002
combine = "multiply"

[scene]
central_radius = 50.0
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.sensitivity, 0.002);
        assert_eq!(opts.camera.combine, QuatCombine::Multiply);
        assert_eq!(opts.scene.central_radius, 50.0);
        // Everything else should be default
        assert_eq!(opts.camera.max_step, 3.0);
        assert_eq!(opts.camera.position, [-1000.0, 0.0, 0.0]);
        assert_eq!(opts.scene.reference_diameter, 12_756.0);
        assert_eq!(opts.geometry, GeometryOptions::default());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetCamera));
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(KeyAction::MoveLeft));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_keybindings_replace_defaults() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn bundled_preset_parses() {
        let opts =
            Options::from_toml_str(include_str!("../../assets/presets/close_up.toml"))
                .unwrap();
        assert_eq!(opts.camera.fovy, 60.0);
        assert_eq!(opts.camera.combine, QuatCombine::Multiply);
        assert_eq!(opts.geometry.ring_sectors, 128);
        assert_eq!(opts.scene.seconds_per_day, 0.25);
        assert_eq!(opts.scene.central_radius, 109.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, OrreryError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.view_roll_degrees = 23.0;
        opts.save(&dir.join("tilted.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        let loaded = Options::load(&dir.join("tilted.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir),
            vec!["default".to_owned(), "tilted".to_owned()]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/orrery.toml")).unwrap_err();
        assert!(matches!(err, OrreryError::Io(_)));
    }

    #[test]
    fn overrides_patch_single_fields() {
        let opts = Options::default()
            .apply_override("camera.sensitivity=0.002")
            .unwrap()
            .apply_override("camera.combine=multiply")
            .unwrap()
            .apply_override("geometry.sphere_stacks=12")
            .unwrap();
        assert_eq!(opts.camera.sensitivity, 0.002);
        assert_eq!(opts.camera.combine, QuatCombine::Multiply);
        assert_eq!(opts.geometry.sphere_stacks, 12);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
    }

    #[test]
    fn bad_overrides_are_options_errors() {
        let opts = Options::default();
        for spec in [
            "camera.sensitivity",
            "sensitivity=1",
            "lens.fovy=60",
            "camera.zoom=2",
            "geometry.sphere_stacks=lots",
        ] {
            assert!(
                matches!(opts.apply_override(spec), Err(OrreryError::OptionsParse(_))),
                "{spec}"
            );
        }
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("scene"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("sensitivity").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("combine").is_none());
    }
}
