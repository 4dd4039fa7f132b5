//! Rigid-body transform algebra.

/// Rotation-plus-translation transforms and the auxiliary-frame primitives.
pub mod rbt;

pub use rbt::{apply_wrt, mix, normal_matrix, Rbt};
