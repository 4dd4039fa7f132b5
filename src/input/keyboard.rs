use serde::{Deserialize, Serialize};

use crate::engine::command::ViewerCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so option files stay readable:
/// ```toml
/// [keybindings.bindings]
/// cycle_view = "KeyV"
/// toggle_sky_sky = "KeyM"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Log the key bindings.
    Help,
    /// Save the current frame to disk.
    Screenshot,
    /// Advance to the next shading mode.
    CycleShading,
    /// Look through the next frame.
    CycleView,
    /// Edit the next frame.
    CycleEditTarget,
    /// Switch the camera between world-sky and sky-sky motion.
    ToggleSkySky,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// All actions, in the order they are listed by help.
    pub const ALL: [Self; 7] = [
        Self::Help,
        Self::Screenshot,
        Self::CycleShading,
        Self::CycleView,
        Self::CycleEditTarget,
        Self::ToggleSkySky,
        Self::Quit,
    ];

    /// The command this action triggers.
    #[must_use]
    pub const fn command(self) -> ViewerCommand {
        match self {
            Self::Help => ViewerCommand::Help,
            Self::Screenshot => ViewerCommand::Screenshot,
            Self::CycleShading => ViewerCommand::CycleShading,
            Self::CycleView => ViewerCommand::CycleView,
            Self::CycleEditTarget => ViewerCommand::CycleEditTarget,
            Self::ToggleSkySky => ViewerCommand::ToggleSkySky,
            Self::Quit => ViewerCommand::Quit,
        }
    }

    /// One-line description used by help.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Help => "show this help",
            Self::Screenshot => "save a screenshot",
            Self::CycleShading => "cycle shading mode",
            Self::CycleView => "cycle view (sky camera, object 1, object 2)",
            Self::CycleEditTarget => {
                "cycle edit target (sky camera, object 1, object 2)"
            }
            Self::ToggleSkySky => {
                "toggle world-sky / sky-sky camera motion"
            }
            Self::Quit => "quit",
        }
    }
}
