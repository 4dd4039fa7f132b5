//! Input handling: event types, mouse state, key actions, and the mapping
//! from mouse drags to motion transforms.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Drag classification and delta-to-motion mapping.
pub mod motion;
/// Button state and pointer position tracking.
pub mod mouse;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use motion::{DragKind, MotionMapper};
pub use mouse::{MouseButtons, MouseState};
