//! Scene state: the world, the sky camera, and two objects.
//!
//! Every pose is an [`Rbt`] relative to the world frame. Poses change only
//! through [`SceneState::apply_motion`], which applies a drag to the current
//! edit target in its auxiliary frame.

/// Auxiliary-frame construction for drags.
pub mod aux_frame;
/// View / edit-target selection and sign policy.
pub mod selector;

pub use aux_frame::build_aux;
use glam::DVec3;
pub use selector::{CameraMode, FrameId, FrameSelector, SignFlip};

use crate::{
    math::{apply_wrt, Rbt},
    options::SceneOptions,
};

/// Poses of every frame in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    world: Rbt,
    sky: Rbt,
    object1: Rbt,
    object2: Rbt,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&SceneOptions::default())
    }
}

impl SceneState {
    /// Initial poses from the scene options. Every frame starts unrotated.
    #[must_use]
    pub fn new(options: &SceneOptions) -> Self {
        Self {
            world: Rbt::IDENTITY,
            sky: Rbt::from_translation(DVec3::from(options.camera_position)),
            object1: Rbt::from_translation(DVec3::from(
                options.object1_position,
            )),
            object2: Rbt::from_translation(DVec3::from(
                options.object2_position,
            )),
        }
    }

    /// The world frame (always identity).
    #[must_use]
    pub const fn world(&self) -> Rbt {
        self.world
    }

    /// Pose of a frame.
    #[must_use]
    pub const fn rbt(&self, frame: FrameId) -> Rbt {
        match frame {
            FrameId::Camera => self.sky,
            FrameId::Object1 => self.object1,
            FrameId::Object2 => self.object2,
        }
    }

    /// Replace the pose of a frame.
    pub fn set_rbt(&mut self, frame: FrameId, rbt: Rbt) {
        *self.rbt_mut(frame) = rbt;
    }

    /// Pose of the eye when looking through `view`.
    #[must_use]
    pub const fn eye_rbt(&self, view: FrameId) -> Rbt {
        self.rbt(view)
    }

    fn rbt_mut(&mut self, frame: FrameId) -> &mut Rbt {
        match frame {
            FrameId::Camera => &mut self.sky,
            FrameId::Object1 => &mut self.object1,
            FrameId::Object2 => &mut self.object2,
        }
    }

    /// Apply the motion `m` to the selected edit target.
    ///
    /// The target's pose becomes `A · m · A⁻¹ · pose`, with `A` from
    /// [`build_aux`]. Editing the camera while looking through an object is
    /// a no-op. Returns whether a pose changed.
    pub fn apply_motion(&mut self, selector: &FrameSelector, m: &Rbt) -> bool {
        if !selector.edit_allowed() {
            return false;
        }
        let target = selector.edit_target();
        let aux = build_aux(
            target,
            selector.view(),
            selector.sky_sky(),
            self,
        );
        let updated = apply_wrt(m, &self.rbt(target), &aux);
        self.set_rbt(target, updated);
        true
    }
}
