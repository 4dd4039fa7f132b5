use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Projection and drag-sensitivity parameters.
pub struct CameraOptions {
    /// Minimum field of view kept visible on the narrower window axis
    /// (degrees).
    #[schemars(title = "Minimum Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub min_fovy: f64,
    /// Signed near-plane z in eye space (negative).
    #[schemars(range(max = 0.0))]
    pub znear: f64,
    /// Signed far-plane z in eye space (negative, beyond `znear`).
    #[schemars(range(max = 0.0))]
    pub zfar: f64,
    /// Degrees of rotation per pixel of left-drag.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub rotate_speed: f64,
    /// World units of translation per pixel of right/middle-drag.
    #[schemars(title = "Translate Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub translate_speed: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            min_fovy: 60.0,
            znear: -0.1,
            zfar: -50.0,
            rotate_speed: 1.0,
            translate_speed: 0.01,
        }
    }
}
