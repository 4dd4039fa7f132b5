//! Field-of-view policy and perspective projection.
//!
//! The eye looks down its local −z axis, and near/far are given as *signed*
//! z coordinates (both negative). The projection maps the near plane to NDC
//! z = +1 and the far plane to −1, so nearer fragments have larger depth.

use glam::{DMat4, DVec4};

use super::viewport::Viewport;
use crate::options::CameraOptions;

const EPS: f64 = 1e-8;

/// Vertical field of view (degrees) that keeps at least `min_fovy` degrees
/// visible along the window's narrower axis.
///
/// Landscape and square windows use `min_fovy` directly. Portrait windows
/// widen the vertical FOV so the horizontal FOV stays at `min_fovy`.
/// `width` and `height` must be positive.
#[must_use]
pub fn update_fovy(min_fovy: f64, width: u32, height: u32) -> f64 {
    if width >= height {
        return min_fovy;
    }
    let half = (min_fovy * 0.5).to_radians();
    let ratio = f64::from(height) / f64::from(width);
    2.0 * (half.sin() * ratio).atan2(half.cos()).to_degrees()
}

/// Perspective projection for a vertical FOV in degrees.
///
/// Degenerate inputs leave the affected entries at zero instead of
/// dividing by zero.
#[must_use]
pub fn make_projection(fovy: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
    let half = (fovy * 0.5).to_radians();
    let f = if half.sin().abs() < EPS {
        0.0
    } else {
        1.0 / half.tan()
    };

    let m00 = if aspect.abs() > EPS { f / aspect } else { 0.0 };
    let (m22, m23) = if (far - near).abs() > EPS {
        let depth = far - near;
        ((far + near) / depth, -2.0 * far * near / depth)
    } else {
        (0.0, 0.0)
    };

    DMat4::from_cols(
        DVec4::new(m00, 0.0, 0.0, 0.0),
        DVec4::new(0.0, f, 0.0, 0.0),
        DVec4::new(0.0, 0.0, m22, -1.0),
        DVec4::new(0.0, 0.0, m23, 0.0),
    )
}

/// Current projection parameters, refreshed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Minimum FOV kept visible on the narrower window axis (degrees).
    pub min_fovy: f64,
    /// Current vertical FOV (degrees).
    pub fovy: f64,
    /// Signed near-plane z (negative).
    pub near: f64,
    /// Signed far-plane z (negative).
    pub far: f64,
}

impl Frustum {
    /// Build from camera options for the given window.
    #[must_use]
    pub fn new(options: &CameraOptions, viewport: Viewport) -> Self {
        Self {
            min_fovy: options.min_fovy,
            fovy: update_fovy(options.min_fovy, viewport.width, viewport.height),
            near: options.znear,
            far: options.zfar,
        }
    }

    /// Recompute the vertical FOV for a new window size.
    pub fn update(&mut self, viewport: Viewport) {
        self.fovy = update_fovy(self.min_fovy, viewport.width, viewport.height);
    }

    /// Projection matrix for the given window.
    #[must_use]
    pub fn projection(&self, viewport: Viewport) -> DMat4 {
        make_projection(self.fovy, viewport.aspect(), self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    #[test]
    fn square_window_uses_minimum() {
        assert_eq!(update_fovy(60.0, 512, 512), 60.0);
    }

    #[test]
    fn landscape_window_uses_minimum() {
        assert_eq!(update_fovy(60.0, 1024, 512), 60.0);
    }

    #[test]
    fn portrait_window_widens_fovy() {
        let fovy = update_fovy(60.0, 512, 1024);
        assert!(fovy > 60.0);
        // Horizontal FOV recovered from the widened vertical FOV.
        let aspect = 512.0 / 1024.0;
        let half_h =
            ((fovy * 0.5).to_radians().tan() * aspect).atan().to_degrees();
        assert!((2.0 * half_h - 60.0).abs() < 1e-9);
    }

    #[test]
    fn portrait_fovy_is_continuous_at_square() {
        let just_portrait = update_fovy(60.0, 1000, 1001);
        assert!((just_portrait - 60.0).abs() < 0.1);
    }

    #[test]
    fn near_maps_to_plus_one_far_to_minus_one() {
        let p = make_projection(60.0, 1.0, -0.1, -50.0);
        let near = p * DVec3::new(0.0, 0.0, -0.1).extend(1.0);
        let far = p * DVec3::new(0.0, 0.0, -50.0).extend(1.0);
        assert!((near.z / near.w - 1.0).abs() < 1e-9);
        assert!((far.z / far.w + 1.0).abs() < 1e-9);
    }

    #[test]
    fn fov_edge_maps_to_ndc_edge() {
        let p = make_projection(90.0, 2.0, -0.1, -50.0);
        // At 90° vertical FOV, y = -z is the top edge.
        let top = p * DVec4::new(0.0, 1.0, -1.0, 1.0);
        assert!((top.y / top.w - 1.0).abs() < 1e-9);
        // Aspect 2 doubles the horizontal extent.
        let right = p * DVec4::new(2.0, 0.0, -1.0, 1.0);
        assert!((right.x / right.w - 1.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_do_not_produce_nan() {
        let p = make_projection(0.0, 0.0, -1.0, -1.0);
        assert!(!p.is_nan());
        assert_eq!(p.x_axis.x, 0.0);
        assert_eq!(p.y_axis.y, 0.0);
        assert_eq!(p.z_axis.z, 0.0);
    }

    #[test]
    fn frustum_tracks_resize() {
        let options = CameraOptions::default();
        let mut frustum = Frustum::new(&options, Viewport::new(512, 512));
        assert_eq!(frustum.fovy, 60.0);
        frustum.update(Viewport::new(300, 600));
        assert!(frustum.fovy > 60.0);
        frustum.update(Viewport::new(600, 300));
        assert_eq!(frustum.fovy, 60.0);
    }
}
