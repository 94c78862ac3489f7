use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Model", inline)]
#[serde(default)]
/// Texture sheet dimensions and geometry scale for a model.
pub struct ModelOptions {
    /// Width of the model's texture sheet in texels.
    #[schemars(title = "Texture Width", range(min = 1))]
    pub texture_width: u32,
    /// Height of the model's texture sheet in texels.
    #[schemars(title = "Texture Height", range(min = 1))]
    pub texture_height: u32,
    /// Units-per-texel factor handed to `render` (1/16 for block-sized
    /// parts).
    #[schemars(title = "Render Scale", range(min = 0.001, max = 1.0))]
    pub render_scale: f32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            texture_width: 64,
            texture_height: 32,
            render_scale: 0.0625,
        }
    }
}
