//! The auxiliary frame a drag is expressed in.
//!
//! Motions are built in screen terms (x right, y up, z toward the viewer)
//! and applied about a chosen origin. The auxiliary frame supplies both:
//! its rotation orients the motion, its translation is the pivot.

use super::{selector::FrameId, SceneState};
use crate::math::{mix, Rbt};

/// Frame in which to apply a motion to `edit_target`.
///
/// - An object pivots about its own centre, along the axes of the frame it
///   is viewed from: `mix(object, eye)`.
/// - The camera uses its own axes, pivoting about its own centre in sky-sky
///   mode or about the world origin otherwise: `mix(sky or world, sky)`.
#[must_use]
pub fn build_aux(
    edit_target: FrameId,
    view: FrameId,
    sky_sky: bool,
    scene: &SceneState,
) -> Rbt {
    match edit_target {
        FrameId::Camera => {
            let sky = scene.rbt(FrameId::Camera);
            let pivot = if sky_sky { sky } else { scene.world() };
            mix(&pivot, &sky)
        }
        FrameId::Object1 | FrameId::Object2 => {
            mix(&scene.rbt(edit_target), &scene.eye_rbt(view))
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::options::SceneOptions;

    const EPS: f64 = 1e-12;

    fn scene() -> SceneState {
        let mut scene = SceneState::new(&SceneOptions::default());
        scene.set_rbt(
            FrameId::Camera,
            Rbt::from_translation(DVec3::new(0.0, 0.25, 4.0))
                * Rbt::from_rotation_y(15.0),
        );
        scene.set_rbt(
            FrameId::Object2,
            Rbt::from_translation(DVec3::new(0.75, 0.0, 0.0))
                * Rbt::from_rotation_x(40.0),
        );
        scene
    }

    #[test]
    fn object_aux_uses_object_origin_and_eye_axes() {
        let scene = scene();
        let aux = build_aux(FrameId::Object1, FrameId::Camera, false, &scene);
        assert_eq!(
            aux.translation(),
            scene.rbt(FrameId::Object1).translation()
        );
        assert_eq!(aux.rotation(), scene.rbt(FrameId::Camera).rotation());
    }

    #[test]
    fn object_aux_follows_view_frame() {
        let scene = scene();
        let aux = build_aux(FrameId::Object1, FrameId::Object2, false, &scene);
        assert_eq!(aux.rotation(), scene.rbt(FrameId::Object2).rotation());
        // Object aux ignores the sky-sky flag.
        let other = build_aux(FrameId::Object1, FrameId::Object2, true, &scene);
        assert!(aux.abs_diff_eq(&other, EPS));
    }

    #[test]
    fn camera_aux_world_sky_pivots_about_world_origin() {
        let scene = scene();
        let aux = build_aux(FrameId::Camera, FrameId::Camera, false, &scene);
        assert_eq!(aux.translation(), DVec3::ZERO);
        assert_eq!(aux.rotation(), scene.rbt(FrameId::Camera).rotation());
    }

    #[test]
    fn camera_aux_sky_sky_is_the_camera_itself() {
        let scene = scene();
        let aux = build_aux(FrameId::Camera, FrameId::Camera, true, &scene);
        assert!(aux.abs_diff_eq(&scene.rbt(FrameId::Camera), EPS));
    }
}
