use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Locomotion and pose-transition tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Multiplier applied to the speed and degree of every locomotion
    /// function. Scaled-down models use < 1.0 so limbs swing less.
    #[schemars(title = "Movement Scale", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub movement_scale: f32,
    /// Default length of a pose transition, in ticks.
    #[schemars(title = "Transition Ticks", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub transition_ticks: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            movement_scale: 1.0,
            transition_ticks: 10.0,
        }
    }
}
