// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D viewer for rigid-body frames.
//!
//! A sky camera and two cube objects sit above a ground plane. The user
//! picks which frame to look through and which frame to edit; mouse drags
//! become rigid-body motions applied with respect to an auxiliary frame, so
//! every edit feels natural from the current viewpoint.
//!
//! # Key entry points
//!
//! - [`math::Rbt`] - rigid-body transform algebra
//! - [`scene::SceneState`] - frame poses and the motion update rule
//! - [`scene::FrameSelector`] - view, edit target and camera mode
//! - [`engine::core::ViewerCore`] - GPU-free interaction state
//! - [`engine::ViewerEngine`] - interaction state plus wgpu rendering
//! - [`options::Options`] - start-up configuration (display, camera, scene,
//!   lighting, key bindings)
//!
//! # Architecture
//!
//! Input events flow into [`engine::core::ViewerCore`], which converts
//! window coordinates, classifies drags, maps them to motion transforms,
//! and updates the scene. Each frame it produces an
//! [`engine::core::RenderSnapshot`] that the [`renderer`] uploads and draws
//! with a single depth-tested pipeline.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod math;
pub mod options;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{
    command::{ViewerCommand, ViewerRequest},
    core::ViewerCore,
    ViewerEngine,
};
pub use error::SkyviewError;
pub use input::{InputEvent, MouseButton};
pub use math::Rbt;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
