//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, render targets, and the
//! pipeline boilerplate the scene renderer builds on.

/// Shared wgpu boilerplate for the scene pipeline.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Off-screen colour targets and depth buffers.
pub mod texture;
