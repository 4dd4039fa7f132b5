use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fragment shading applied to every drawable.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Flat object colour.
    #[default]
    Solid,
    /// Two-light Lambert diffuse.
    Diffuse,
    /// Procedural checkerboard modulating the diffuse term.
    Checker,
    /// Eye-space normals mapped to colour.
    Normals,
}

impl ShadingMode {
    /// All modes in cycling order.
    pub const ALL: [Self; 4] =
        [Self::Solid, Self::Diffuse, Self::Checker, Self::Normals];

    /// The next mode, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Solid => Self::Diffuse,
            Self::Diffuse => Self::Checker,
            Self::Checker => Self::Normals,
            Self::Normals => Self::Solid,
        }
    }

    /// Index passed to the fragment shader.
    #[must_use]
    pub const fn shader_index(self) -> u32 {
        match self {
            Self::Solid => 0,
            Self::Diffuse => 1,
            Self::Checker => 2,
            Self::Normals => 3,
        }
    }

    /// Human-readable name used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Diffuse => "diffuse",
            Self::Checker => "checker",
            Self::Normals => "normals",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Window and output settings.
pub struct DisplayOptions {
    /// Initial window width in pixels.
    #[schemars(range(min = 1))]
    pub width: u32,
    /// Initial window height in pixels.
    #[schemars(range(min = 1))]
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Initial shading mode.
    pub shading: ShadingMode,
    /// Where screenshots are written (binary PPM).
    pub screenshot_path: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            title: "Skyview".into(),
            shading: ShadingMode::default(),
            screenshot_path: "out.ppm".into(),
        }
    }
}
