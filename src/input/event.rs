/// Platform-agnostic input events.
///
/// Positions are window pixels with the origin at the top-left, as
/// reported by the windowing system. They are fed into
/// [`ViewerCore::handle_input`](crate::engine::core::ViewerCore::handle_input).
///
/// # Example
///
/// ```
/// # use skyview::{engine::core::ViewerCore, options::Options, InputEvent, MouseButton};
/// let mut core = ViewerCore::new(&Options::default());
/// let _ = core.handle_input(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
///     x: 100.0,
///     y: 200.0,
/// });
/// let _ = core.handle_input(InputEvent::CursorMoved { x: 110.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels (top-left origin).
        y: f64,
    },
    /// Mouse button pressed or released at a window position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels (top-left origin).
        y: f64,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button, ignoring back/forward/other buttons.
    #[must_use]
    pub const fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}
