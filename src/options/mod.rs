//! Model construction and animation options with TOML preset support.
//!
//! Options serialize to/from TOML so a mod can ship per-model tuning files
//! (texture sheet size, render scale, locomotion scaling) next to its assets.

mod animation;
mod model;

use std::path::Path;

pub use animation::AnimationOptions;
pub use model::ModelOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Texture sheet and geometry scale.
    pub model: ModelOptions,
    /// Locomotion and transition tuning.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file cannot be read, or
    /// [`RigError::OptionsParse`] for malformed TOML.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
movement_scale = 0.5
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.movement_scale, 0.5);
        assert_eq!(opts.model.texture_width, 64);
        assert_eq!(opts.model.texture_height, 32);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[model]\ntexture_width = \"wide\"")
            .unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("dragon.toml");
        let mut opts = Options::default();
        opts.model.texture_width = 256;
        opts.animation.movement_scale = 0.75;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("model"));
        assert!(props.contains_key("animation"));

        let model = &props["model"]["properties"];
        assert!(model.get("texture_width").is_some());
        assert!(model.get("render_scale").is_some());
    }
}
