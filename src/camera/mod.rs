//! Projection and window geometry.
//!
//! The eye pose itself lives in [`crate::scene`]; this module only decides
//! how much of the world the eye sees.

/// FOV policy and perspective projection.
pub mod frustum;
/// Window size and pixel-coordinate conversion.
pub mod viewport;

pub use frustum::{make_projection, update_fovy, Frustum};
pub use viewport::Viewport;
