//! Mouse deltas to local motion transforms.

use glam::{DVec2, DVec3};

use super::mouse::MouseButtons;
use crate::{math::Rbt, options::CameraOptions, scene::SignFlip};

/// Kind of drag implied by the held buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Left without right: rotate.
    Rotate,
    /// Right without left: translate in the view plane.
    Translate,
    /// Middle, or left and right together: move along the view axis.
    Dolly,
}

impl DragKind {
    /// Classify the held buttons, or `None` if none are down.
    #[must_use]
    pub const fn from_buttons(buttons: MouseButtons) -> Option<Self> {
        if buttons.left && !buttons.right {
            Some(Self::Rotate)
        } else if buttons.right && !buttons.left {
            Some(Self::Translate)
        } else if buttons.middle || (buttons.left && buttons.right) {
            Some(Self::Dolly)
        } else {
            None
        }
    }
}

/// Turns a pixel delta into a motion transform `M`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionMapper {
    /// Degrees of rotation per pixel.
    pub rotate_speed: f64,
    /// World units of translation per pixel.
    pub translate_speed: f64,
}

impl Default for MotionMapper {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl MotionMapper {
    /// Build from camera options.
    #[must_use]
    pub const fn new(options: &CameraOptions) -> Self {
        Self {
            rotate_speed: options.rotate_speed,
            translate_speed: options.translate_speed,
        }
    }

    /// Motion for a drag of `delta` pixels (x right, y up).
    ///
    /// - rotate: `RotX(−dy) · RotY(dx)`, both deltas negated when
    ///   `flip.rotation`.
    /// - translate: `(dx, dy, 0)`, both negated when `flip.translation`.
    /// - dolly: `(0, 0, −dy)`, `dy` negated when `flip.translation`.
    #[must_use]
    pub fn motion(&self, kind: DragKind, delta: DVec2, flip: SignFlip) -> Rbt {
        match kind {
            DragKind::Rotate => {
                let d = if flip.rotation { -delta } else { delta };
                let d = d * self.rotate_speed;
                Rbt::from_rotation_x(-d.y) * Rbt::from_rotation_y(d.x)
            }
            DragKind::Translate => {
                let d = if flip.translation { -delta } else { delta };
                let d = d * self.translate_speed;
                Rbt::from_translation(DVec3::new(d.x, d.y, 0.0))
            }
            DragKind::Dolly => {
                let dy = if flip.translation { -delta.y } else { delta.y };
                Rbt::from_translation(DVec3::new(
                    0.0,
                    0.0,
                    -dy * self.translate_speed,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;
    const NO_FLIP: SignFlip = SignFlip {
        rotation: false,
        translation: false,
    };
    const ALL_FLIP: SignFlip = SignFlip {
        rotation: true,
        translation: true,
    };

    fn buttons(left: bool, middle: bool, right: bool) -> MouseButtons {
        MouseButtons {
            left,
            middle,
            right,
        }
    }

    #[test]
    fn button_classification() {
        let f = false;
        let t = true;
        assert_eq!(DragKind::from_buttons(buttons(f, f, f)), None);
        assert_eq!(
            DragKind::from_buttons(buttons(t, f, f)),
            Some(DragKind::Rotate)
        );
        // Left wins over middle when right is up.
        assert_eq!(
            DragKind::from_buttons(buttons(t, t, f)),
            Some(DragKind::Rotate)
        );
        assert_eq!(
            DragKind::from_buttons(buttons(f, f, t)),
            Some(DragKind::Translate)
        );
        assert_eq!(
            DragKind::from_buttons(buttons(f, t, t)),
            Some(DragKind::Translate)
        );
        assert_eq!(
            DragKind::from_buttons(buttons(f, t, f)),
            Some(DragKind::Dolly)
        );
        assert_eq!(
            DragKind::from_buttons(buttons(t, f, t)),
            Some(DragKind::Dolly)
        );
        assert_eq!(
            DragKind::from_buttons(buttons(t, t, t)),
            Some(DragKind::Dolly)
        );
    }

    #[test]
    fn one_pixel_is_one_degree() {
        let mapper = MotionMapper::default();
        let m = mapper.motion(DragKind::Rotate, DVec2::new(10.0, 0.0), NO_FLIP);
        assert!(m.abs_diff_eq(&Rbt::from_rotation_y(10.0), EPS));

        let m = mapper.motion(DragKind::Rotate, DVec2::new(0.0, 10.0), NO_FLIP);
        assert!(m.abs_diff_eq(&Rbt::from_rotation_x(-10.0), EPS));
    }

    #[test]
    fn rotation_applies_y_before_x() {
        let mapper = MotionMapper::default();
        let m = mapper.motion(DragKind::Rotate, DVec2::new(30.0, 20.0), NO_FLIP);
        let expected = Rbt::from_rotation_x(-20.0) * Rbt::from_rotation_y(30.0);
        assert!(m.abs_diff_eq(&expected, EPS));
    }

    #[test]
    fn rotation_flip_negates_both_deltas() {
        let mapper = MotionMapper::default();
        let delta = DVec2::new(10.0, 5.0);
        let flipped = mapper.motion(DragKind::Rotate, delta, ALL_FLIP);
        let negated = mapper.motion(DragKind::Rotate, -delta, NO_FLIP);
        assert!(flipped.abs_diff_eq(&negated, EPS));
    }

    #[test]
    fn rotation_ignores_translation_flip() {
        let mapper = MotionMapper::default();
        let delta = DVec2::new(10.0, 5.0);
        let only_translation = SignFlip {
            rotation: false,
            translation: true,
        };
        assert_eq!(
            mapper.motion(DragKind::Rotate, delta, only_translation),
            mapper.motion(DragKind::Rotate, delta, NO_FLIP)
        );
    }

    #[test]
    fn translation_is_scaled() {
        let mapper = MotionMapper::default();
        let m = mapper.motion(
            DragKind::Translate,
            DVec2::new(100.0, -50.0),
            NO_FLIP,
        );
        assert!(m
            .translation()
            .abs_diff_eq(DVec3::new(1.0, -0.5, 0.0), EPS));
        let m = mapper.motion(
            DragKind::Translate,
            DVec2::new(100.0, -50.0),
            ALL_FLIP,
        );
        assert!(m
            .translation()
            .abs_diff_eq(DVec3::new(-1.0, 0.5, 0.0), EPS));
    }

    #[test]
    fn dolly_uses_only_dy() {
        let mapper = MotionMapper::default();
        let m = mapper.motion(DragKind::Dolly, DVec2::new(40.0, 100.0), NO_FLIP);
        assert!(m.translation().abs_diff_eq(DVec3::new(0.0, 0.0, -1.0), EPS));
        let m = mapper.motion(DragKind::Dolly, DVec2::new(40.0, 100.0), ALL_FLIP);
        assert!(m.translation().abs_diff_eq(DVec3::new(0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn speeds_come_from_options() {
        let options = CameraOptions {
            rotate_speed: 0.5,
            translate_speed: 0.1,
            ..CameraOptions::default()
        };
        let mapper = MotionMapper::new(&options);
        let r = mapper.motion(DragKind::Rotate, DVec2::new(20.0, 0.0), NO_FLIP);
        assert!(r.abs_diff_eq(&Rbt::from_rotation_y(10.0), EPS));
        let t = mapper.motion(DragKind::Translate, DVec2::new(1.0, 0.0), NO_FLIP);
        assert!(t.translation().abs_diff_eq(DVec3::new(0.1, 0.0, 0.0), EPS));
    }
}
