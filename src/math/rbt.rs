//! Rigid-body transforms.
//!
//! An [`Rbt`] is a rotation followed by a translation: the homogeneous
//! matrix
//!
//! ```text
//! | R t |
//! | 0 1 |
//! ```
//!
//! with `R` orthonormal. The fields are private and every constructor is
//! rigid, so a value of this type can never carry scale or shear. Products
//! re-orthonormalise `R` so rounding error cannot build up over long drags.
//! Angles are in degrees throughout.

use std::ops::Mul;

use glam::{DMat3, DMat4, DQuat, DVec3};

/// A rigid-body transform (rotation ⊕ translation) in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rbt {
    rotation: DMat3,
    translation: DVec3,
}

impl Default for Rbt {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rbt {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Pure translation by `offset`.
    #[must_use]
    pub const fn from_translation(offset: DVec3) -> Self {
        Self {
            rotation: DMat3::IDENTITY,
            translation: offset,
        }
    }

    /// Pure rotation about the x axis.
    #[must_use]
    pub fn from_rotation_x(degrees: f64) -> Self {
        Self {
            rotation: DMat3::from_rotation_x(degrees.to_radians()),
            translation: DVec3::ZERO,
        }
    }

    /// Pure rotation about the y axis.
    #[must_use]
    pub fn from_rotation_y(degrees: f64) -> Self {
        Self {
            rotation: DMat3::from_rotation_y(degrees.to_radians()),
            translation: DVec3::ZERO,
        }
    }

    /// Rotation block.
    #[must_use]
    pub const fn rotation(&self) -> DMat3 {
        self.rotation
    }

    /// Translation column.
    #[must_use]
    pub const fn translation(&self) -> DVec3 {
        self.translation
    }

    /// `self · other`: apply `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: orthonormalize(self.rotation * other.rotation),
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// Exact inverse: `(R, t)⁻¹ = (Rᵀ, −Rᵀt)`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// The rotation block alone, with zero translation.
    ///
    /// For a rigid model-view this is also its normal matrix, since the
    /// inverse-transpose of an orthonormal block is the block itself.
    #[must_use]
    pub const fn linear_part(&self) -> Self {
        Self {
            rotation: self.rotation,
            translation: DVec3::ZERO,
        }
    }

    /// Transform a point (rotation then translation).
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }

    /// Transform a direction (rotation only).
    #[must_use]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation * vector
    }

    /// The homogeneous 4×4 matrix.
    #[must_use]
    pub fn to_mat4(&self) -> DMat4 {
        let mut m = DMat4::from_mat3(self.rotation);
        m.w_axis = self.translation.extend(1.0);
        m
    }

    /// Component-wise comparison within `max_abs_diff`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f64) -> bool {
        self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
            && self.translation.abs_diff_eq(other.translation, max_abs_diff)
    }
}

/// Nearest rotation to an almost-orthonormal `m`, via a unit quaternion.
fn orthonormalize(m: DMat3) -> DMat3 {
    DMat3::from_quat(DQuat::from_mat3(&m).normalize())
}

impl Mul for Rbt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<&Rbt> for &Rbt {
    type Output = Rbt;

    fn mul(self, rhs: &Rbt) -> Rbt {
        self.compose(rhs)
    }
}

/// Normal matrix of a rigid model-view: its rotation block.
#[must_use]
pub const fn normal_matrix(model_view: &Rbt) -> Rbt {
    model_view.linear_part()
}

/// A frame with the origin of `translation_source` and the axes of
/// `rotation_source`.
#[must_use]
pub const fn mix(translation_source: &Rbt, rotation_source: &Rbt) -> Rbt {
    Rbt {
        rotation: rotation_source.rotation,
        translation: translation_source.translation,
    }
}

/// Apply the local motion `m`, expressed in frame `a`, to the frame `o`:
/// `a · m · a⁻¹ · o`.
#[must_use]
pub fn apply_wrt(m: &Rbt, o: &Rbt, a: &Rbt) -> Rbt {
    a.compose(m).compose(&a.inverse()).compose(o)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    const EPS: f64 = 1e-9;

    fn random_rbt(rng: &mut StdRng) -> Rbt {
        let t = DVec3::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0),
        );
        Rbt::from_translation(t)
            * Rbt::from_rotation_y(rng.random_range(-180.0..180.0))
            * Rbt::from_rotation_x(rng.random_range(-180.0..180.0))
    }

    #[test]
    fn inverse_composes_to_identity() {
        let mut rng = StdRng::seed_from_u64(175);
        for _ in 0..64 {
            let a = random_rbt(&mut rng);
            assert!((a * a.inverse()).abs_diff_eq(&Rbt::IDENTITY, EPS));
            assert!((a.inverse() * a).abs_diff_eq(&Rbt::IDENTITY, EPS));
        }
    }

    #[test]
    fn inverse_matches_general_matrix_inverse() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..16 {
            let a = random_rbt(&mut rng);
            let general = a.to_mat4().inverse();
            assert!(a.inverse().to_mat4().abs_diff_eq(general, 1e-9));
        }
    }

    #[test]
    fn composition_is_associative() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            let (a, b, c) = (
                random_rbt(&mut rng),
                random_rbt(&mut rng),
                random_rbt(&mut rng),
            );
            assert!(((a * b) * c).abs_diff_eq(&(a * (b * c)), EPS));
        }
    }

    #[test]
    fn composition_is_not_commutative() {
        let t = Rbt::from_translation(DVec3::X);
        let r = Rbt::from_rotation_y(90.0);
        assert!(!(t * r).abs_diff_eq(&(r * t), 1e-6));
    }

    #[test]
    fn compose_matches_matrix_product() {
        let mut rng = StdRng::seed_from_u64(4);
        let a = random_rbt(&mut rng);
        let b = random_rbt(&mut rng);
        let product = a.to_mat4() * b.to_mat4();
        assert!((a * b).to_mat4().abs_diff_eq(product, EPS));
    }

    #[test]
    fn rotation_y_maps_x_to_minus_z() {
        let r = Rbt::from_rotation_y(90.0);
        let p = r.transform_point(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::NEG_Z, EPS));
    }

    #[test]
    fn rotation_x_maps_y_to_z() {
        let r = Rbt::from_rotation_x(90.0);
        assert!(r.transform_vector(DVec3::Y).abs_diff_eq(DVec3::Z, EPS));
    }

    #[test]
    fn normal_matrix_drops_translation() {
        let mv = Rbt::from_translation(DVec3::new(1.0, 2.0, 3.0))
            * Rbt::from_rotation_x(30.0);
        let n = normal_matrix(&mv);
        assert_eq!(n.translation(), DVec3::ZERO);
        assert_eq!(n.rotation(), mv.rotation());
        // Directions are unaffected by translation.
        let d = DVec3::new(0.2, -0.4, 0.9);
        assert!(n.transform_vector(d).abs_diff_eq(mv.transform_vector(d), EPS));
    }

    #[test]
    fn mix_takes_origin_and_axes_from_separate_frames() {
        let origin = Rbt::from_translation(DVec3::new(1.0, 0.0, 0.0))
            * Rbt::from_rotation_x(45.0);
        let axes = Rbt::from_translation(DVec3::new(0.0, 9.0, 0.0))
            * Rbt::from_rotation_y(30.0);
        let m = mix(&origin, &axes);
        assert_eq!(m.translation(), origin.translation());
        assert_eq!(m.rotation(), axes.rotation());
    }

    #[test]
    fn apply_wrt_identity_frame_left_multiplies() {
        let m = Rbt::from_rotation_y(20.0);
        let o = Rbt::from_translation(DVec3::new(0.5, 0.0, -1.0));
        let updated = apply_wrt(&m, &o, &Rbt::IDENTITY);
        assert!(updated.abs_diff_eq(&(m * o), EPS));
    }

    #[test]
    fn apply_wrt_own_frame_right_multiplies() {
        let mut rng = StdRng::seed_from_u64(5);
        let o = random_rbt(&mut rng);
        let m = Rbt::from_rotation_x(12.0);
        let updated = apply_wrt(&m, &o, &o);
        assert!(updated.abs_diff_eq(&(o * m), EPS));
    }

    #[test]
    fn to_mat4_places_translation_in_last_column() {
        let t = DVec3::new(-0.75, 0.0, 0.0);
        let m = Rbt::from_translation(t).to_mat4();
        assert_eq!(m.w_axis, t.extend(1.0));
        assert_eq!(m.row(3), glam::DVec4::W);
    }

    #[test]
    fn long_products_stay_orthonormal() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut acc = Rbt::IDENTITY;
        for _ in 0..10_000 {
            let step = random_rbt(&mut rng);
            acc = apply_wrt(&step, &acc, &acc);
        }
        let r = acc.rotation();
        assert!((r * r.transpose()).abs_diff_eq(DMat3::IDENTITY, EPS));
        assert!((r.determinant() - 1.0).abs() < EPS);
    }
}
