//! Which frame the user looks through and which frame the mouse edits.
//!
//! Two independent cursors over the same three frames, plus the sky-sky
//! flag that chooses how the camera moves when it is both the view and the
//! edit target.

use std::fmt;

/// One of the three manipulable reference frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameId {
    /// The free-floating sky camera.
    #[default]
    Camera,
    /// The first cube.
    Object1,
    /// The second cube.
    Object2,
}

impl FrameId {
    /// All frames in cycling order.
    pub const ALL: [Self; 3] = [Self::Camera, Self::Object1, Self::Object2];

    /// The next frame in the cycle Camera → Object1 → Object2 → Camera.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Camera => Self::Object1,
            Self::Object1 => Self::Object2,
            Self::Object2 => Self::Camera,
        }
    }

    /// Whether this is the sky camera.
    #[must_use]
    pub const fn is_camera(self) -> bool {
        matches!(self, Self::Camera)
    }

    /// Human-readable name used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Camera => "sky camera",
            Self::Object1 => "object 1",
            Self::Object2 => "object 2",
        }
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the camera moves when editing itself from its own view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Orbit about the world origin, using the camera's axes.
    WorldSky,
    /// Move about the camera's own origin and axes.
    SkySky,
}

impl CameraMode {
    /// Human-readable name used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorldSky => "world-sky",
            Self::SkySky => "sky-sky",
        }
    }
}

/// Sign conventions for the current selection.
///
/// Editing the frame you are looking through inverts the apparent
/// direction of motion; these flags tell the motion mapper which deltas to
/// negate so the drag direction matches what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignFlip {
    /// Negate both deltas for rotation drags.
    pub rotation: bool,
    /// Negate the deltas for translation and dolly drags.
    pub translation: bool,
}

/// Active view, active edit target, and the sky-sky flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSelector {
    view: FrameId,
    edit_target: FrameId,
    sky_sky: bool,
}

impl FrameSelector {
    /// Start viewing from and editing the camera, in world-sky mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view: FrameId::Camera,
            edit_target: FrameId::Camera,
            sky_sky: false,
        }
    }

    /// The frame the scene is rendered from.
    #[must_use]
    pub const fn view(&self) -> FrameId {
        self.view
    }

    /// The frame mouse drags edit.
    #[must_use]
    pub const fn edit_target(&self) -> FrameId {
        self.edit_target
    }

    /// The recorded sky-sky flag, whether or not it currently applies.
    #[must_use]
    pub const fn sky_sky(&self) -> bool {
        self.sky_sky
    }

    /// Advance the view to the next frame and return it.
    pub fn cycle_view(&mut self) -> FrameId {
        self.view = self.view.next();
        self.view
    }

    /// Advance the edit target to the next frame and return it.
    pub fn cycle_edit_target(&mut self) -> FrameId {
        self.edit_target = self.edit_target.next();
        self.edit_target
    }

    /// Flip the sky-sky flag and return the new value.
    ///
    /// The flag is always recorded; it only affects motion while the camera
    /// is both the view and the edit target.
    pub fn toggle_sky_sky(&mut self) -> bool {
        self.sky_sky = !self.sky_sky;
        self.sky_sky
    }

    /// Whether the edit target is also the view.
    #[must_use]
    pub fn is_self_view(&self) -> bool {
        self.view == self.edit_target
    }

    /// Whether a drag may modify the edit target right now.
    ///
    /// Objects can always be edited. The camera can only be edited while
    /// looking through it.
    #[must_use]
    pub const fn edit_allowed(&self) -> bool {
        !self.edit_target.is_camera() || self.view.is_camera()
    }

    /// Camera motion mode implied by the sky-sky flag.
    #[must_use]
    pub const fn camera_mode(&self) -> CameraMode {
        if self.sky_sky {
            CameraMode::SkySky
        } else {
            CameraMode::WorldSky
        }
    }

    /// Whether the sky-sky flag is in effect for the current selection.
    #[must_use]
    pub const fn sky_sky_active(&self) -> bool {
        self.sky_sky && self.view.is_camera() && self.edit_target.is_camera()
    }

    /// Sign conventions for drags under the current selection.
    ///
    /// Rotation flips whenever the edit target is the camera or the frame
    /// being looked through. Translation and dolly flip only for the camera
    /// in world-sky mode.
    #[must_use]
    pub fn sign_flip(&self) -> SignFlip {
        SignFlip {
            rotation: self.edit_target.is_camera() || self.is_self_view(),
            translation: self.edit_target.is_camera() && !self.sky_sky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = FrameSelector::new();
        assert_eq!(s.view(), FrameId::Camera);
        assert_eq!(s.edit_target(), FrameId::Camera);
        assert!(!s.sky_sky());
        assert_eq!(s, FrameSelector::default());
    }

    #[test]
    fn cycles_have_period_three() {
        let mut s = FrameSelector::new();
        assert_eq!(s.cycle_view(), FrameId::Object1);
        assert_eq!(s.cycle_view(), FrameId::Object2);
        assert_eq!(s.cycle_view(), FrameId::Camera);

        assert_eq!(s.cycle_edit_target(), FrameId::Object1);
        assert_eq!(s.cycle_edit_target(), FrameId::Object2);
        assert_eq!(s.cycle_edit_target(), FrameId::Camera);
    }

    #[test]
    fn cursors_are_independent() {
        let mut s = FrameSelector::new();
        let _ = s.cycle_view();
        assert_eq!(s.edit_target(), FrameId::Camera);
        let _ = s.cycle_edit_target();
        let _ = s.cycle_edit_target();
        assert_eq!(s.view(), FrameId::Object1);
        assert_eq!(s.edit_target(), FrameId::Object2);
    }

    #[test]
    fn sky_sky_toggle_is_recorded_outside_camera_self_view() {
        let mut s = FrameSelector::new();
        let _ = s.cycle_edit_target();
        assert!(s.toggle_sky_sky());
        assert!(s.sky_sky());
        assert!(!s.sky_sky_active());
        // Returning to the camera activates the recorded flag.
        let _ = s.cycle_edit_target();
        let _ = s.cycle_edit_target();
        assert!(s.sky_sky_active());
        assert_eq!(s.camera_mode(), CameraMode::SkySky);
        assert!(!s.toggle_sky_sky());
        assert_eq!(s.camera_mode(), CameraMode::WorldSky);
    }

    #[test]
    fn camera_edit_requires_camera_view() {
        let mut s = FrameSelector::new();
        assert!(s.edit_allowed());
        let _ = s.cycle_view();
        assert!(!s.edit_allowed());
        let _ = s.cycle_edit_target();
        assert!(s.edit_allowed());
    }

    #[test]
    fn sign_flip_policy() {
        let mut s = FrameSelector::new();
        // Camera edits itself in world-sky mode.
        assert_eq!(
            s.sign_flip(),
            SignFlip {
                rotation: true,
                translation: true
            }
        );

        // Sky-sky keeps the rotation flip but drops the translation flip.
        let _ = s.toggle_sky_sky();
        assert_eq!(
            s.sign_flip(),
            SignFlip {
                rotation: true,
                translation: false
            }
        );
        let _ = s.toggle_sky_sky();

        // Object seen from the camera: no flips.
        let _ = s.cycle_edit_target();
        assert_eq!(s.sign_flip(), SignFlip::default());

        // Object seen through itself: rotation flips.
        let _ = s.cycle_view();
        assert_eq!(
            s.sign_flip(),
            SignFlip {
                rotation: true,
                translation: false
            }
        );
    }

    #[test]
    fn labels() {
        assert_eq!(FrameId::Camera.to_string(), "sky camera");
        assert_eq!(FrameId::Object2.label(), "object 2");
        assert_eq!(CameraMode::SkySky.label(), "sky-sky");
    }
}
