use glam::DVec2;

use super::event::MouseButton;

/// Independent down-state of the three mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MouseButtons {
    /// Left button held.
    pub left: bool,
    /// Middle button held.
    pub middle: bool,
    /// Right button held.
    pub right: bool,
}

impl MouseButtons {
    /// Record a press or release.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
        }
    }

    /// Whether any button is held.
    #[must_use]
    pub const fn any_down(&self) -> bool {
        self.left || self.middle || self.right
    }
}

/// Tracks the last pointer position and held buttons across events.
///
/// Positions use a bottom-left origin so that dragging up is a positive
/// `dy`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    last: DVec2,
    buttons: MouseButtons,
}

impl MouseState {
    /// No buttons held, pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded pointer position (bottom-left origin).
    #[must_use]
    pub const fn last_position(&self) -> DVec2 {
        self.last
    }

    /// Currently held buttons.
    #[must_use]
    pub const fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Record a button transition at `position`.
    pub fn handle_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        position: DVec2,
    ) {
        self.last = position;
        self.buttons.set(button, pressed);
    }

    /// Move the pointer to `position`, returning the delta from the previous
    /// position.
    pub fn handle_move(&mut self, position: DVec2) -> DVec2 {
        let delta = position - self.last;
        self.last = position;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_tracked_independently() {
        let mut state = MouseState::new();
        assert!(!state.buttons().any_down());
        state.handle_button(MouseButton::Left, true, DVec2::ZERO);
        state.handle_button(MouseButton::Right, true, DVec2::ZERO);
        assert!(state.buttons().left && state.buttons().right);
        state.handle_button(MouseButton::Left, false, DVec2::ZERO);
        assert!(!state.buttons().left);
        assert!(state.buttons().right);
        assert!(state.buttons().any_down());
    }

    #[test]
    fn move_reports_delta_from_last_position() {
        let mut state = MouseState::new();
        state.handle_button(MouseButton::Middle, true, DVec2::new(5.0, 5.0));
        assert_eq!(state.handle_move(DVec2::new(8.0, 1.0)), DVec2::new(3.0, -4.0));
        assert_eq!(state.handle_move(DVec2::new(8.0, 2.0)), DVec2::new(0.0, 1.0));
        assert_eq!(state.last_position(), DVec2::new(8.0, 2.0));
    }
}
