//! The viewer's discrete interactive vocabulary.
//!
//! Key presses are translated into a `ViewerCommand` through the key
//! bindings and passed to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute). Mouse drags are
//! continuous and go through
//! [`ViewerCore::handle_input`](super::core::ViewerCore::handle_input)
//! instead.

/// A discrete operation the viewer can perform.
///
/// ```
/// # use skyview::{engine::{command::ViewerCommand, core::ViewerCore}, options::Options};
/// let mut core = ViewerCore::new(&Options::default());
/// let _ = core.execute(ViewerCommand::CycleView);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Look through the next frame: sky camera → object 1 → object 2.
    CycleView,

    /// Edit the next frame: sky camera → object 1 → object 2.
    CycleEditTarget,

    /// Flip between world-sky and sky-sky camera motion.
    ToggleSkySky,

    // ── Display ─────────────────────────────────────────────────────
    /// Advance to the next shading mode.
    CycleShading,

    /// Log the key bindings.
    Help,

    // ── Application ─────────────────────────────────────────────────
    /// Save the current frame as a PPM image.
    Screenshot,

    /// Close the viewer.
    Quit,
}

/// Work a command leaves for the layer that owns the GPU or the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRequest {
    /// Read back the current frame and write it to disk.
    Screenshot,
    /// Leave the event loop.
    Exit,
}
