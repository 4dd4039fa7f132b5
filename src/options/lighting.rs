use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Point lights, given in world space and moved into eye space each frame.
pub struct LightingOptions {
    /// First light position (world space).
    pub light1: [f64; 3],
    /// Second light position (world space).
    pub light2: [f64; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light1: [2.0, 3.0, 14.0],
            light2: [-2.0, -3.0, -5.0],
        }
    }
}
