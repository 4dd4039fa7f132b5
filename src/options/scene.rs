use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Initial layout and colours of the scene.
pub struct SceneOptions {
    /// Initial sky camera position (world space).
    pub camera_position: [f64; 3],
    /// Initial centre of the first cube.
    pub object1_position: [f64; 3],
    /// Initial centre of the second cube.
    pub object2_position: [f64; 3],
    /// First cube colour (linear RGB).
    pub object1_color: [f32; 3],
    /// Second cube colour (linear RGB).
    pub object2_color: [f32; 3],
    /// Cube edge length.
    #[schemars(range(min = 0.01))]
    pub cube_size: f32,
    /// Height of the ground plane.
    pub ground_y: f32,
    /// Half-extent of the square ground plane.
    #[schemars(range(min = 0.01))]
    pub ground_size: f32,
    /// Ground colour (linear RGB).
    pub ground_color: [f32; 3],
    /// Background clear colour (RGB).
    pub clear_color: [f64; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 0.25, 4.0],
            object1_position: [-0.75, 0.0, 0.0],
            object2_position: [0.75, 0.0, 0.0],
            object1_color: [1.0, 0.0, 0.0],
            object2_color: [0.0, 0.0, 1.0],
            cube_size: 1.0,
            ground_y: -2.0,
            ground_size: 10.0,
            ground_color: [0.1, 0.95, 0.1],
            clear_color: [128.0 / 255.0, 200.0 / 255.0, 1.0],
        }
    }
}
