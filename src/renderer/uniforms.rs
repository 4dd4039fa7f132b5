//! GPU uniform layouts for the scene shader.

use glam::{DMat4, DVec4};

use crate::engine::core::{DrawItem, RenderSnapshot};

/// Remaps NDC depth from `[-1, 1]` to wgpu's `[0, 1]`: `z' = (z + w) / 2`.
///
/// Near still maps to the larger value, so the `Greater` depth test keeps
/// working.
pub const CLIP_Z_CORRECTION: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, 1.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, 0.5, 0.0),
    DVec4::new(0.0, 0.0, 0.5, 1.0),
);

/// Per-frame data.
///
/// WGSL layout:
///   projection: mat4x4<f32>  (offset 0)
///   light1: vec4<f32>        (offset 64, eye space, w = 1)
///   light2: vec4<f32>        (offset 80, eye space, w = 1)
///   shading: u32             (offset 96)
///   pad: 3 × u32             (offset 100)
///   Total: 112 bytes
#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct FrameUniform {
    /// Projection with depth remapped for wgpu.
    pub projection: [[f32; 4]; 4],
    /// First light position in eye space.
    pub light1: [f32; 4],
    /// Second light position in eye space.
    pub light2: [f32; 4],
    /// [`ShadingMode::shader_index`](crate::options::ShadingMode::shader_index).
    pub shading: u32,
    /// Padding to a 16-byte multiple.
    pub pad: [u32; 3],
}

impl From<&RenderSnapshot> for FrameUniform {
    fn from(snapshot: &RenderSnapshot) -> Self {
        let projection = CLIP_Z_CORRECTION * snapshot.projection;
        Self {
            projection: projection.as_mat4().to_cols_array_2d(),
            light1: snapshot.lights[0].extend(1.0).as_vec4().to_array(),
            light2: snapshot.lights[1].extend(1.0).as_vec4().to_array(),
            shading: snapshot.shading.shader_index(),
            pad: [0; 3],
        }
    }
}

/// Per-drawable data.
///
/// WGSL layout:
///   model_view: mat4x4<f32>     (offset 0)
///   normal_matrix: mat4x4<f32>  (offset 64, zero translation)
///   color: vec4<f32>            (offset 128, a = 1)
///   Total: 144 bytes
#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct ObjectUniform {
    /// Object-to-eye transform.
    pub model_view: [[f32; 4]; 4],
    /// Rotation part of `model_view`, for normals.
    pub normal_matrix: [[f32; 4]; 4],
    /// Linear RGB colour, alpha 1.
    pub color: [f32; 4],
}

impl From<&DrawItem> for ObjectUniform {
    fn from(item: &DrawItem) -> Self {
        let [r, g, b] = item.color;
        Self {
            model_view: item.model_view.to_mat4().as_mat4().to_cols_array_2d(),
            normal_matrix: item.normal.to_mat4().as_mat4().to_cols_array_2d(),
            color: [r, g, b, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec3, Vec4};

    use super::*;
    use crate::{camera::make_projection, engine::core::ViewerCore, options::Options};

    #[test]
    fn uniform_sizes_match_wgsl() {
        assert_eq!(size_of::<FrameUniform>(), 112);
        assert_eq!(size_of::<ObjectUniform>(), 144);
    }

    #[test]
    fn depth_is_remapped_to_unit_range() {
        let p = CLIP_Z_CORRECTION * make_projection(60.0, 1.0, -0.1, -50.0);
        let near = p * DVec3::new(0.0, 0.0, -0.1).extend(1.0);
        let far = p * DVec3::new(0.0, 0.0, -50.0).extend(1.0);
        assert!((near.z / near.w - 1.0).abs() < 1e-9);
        assert!((far.z / far.w).abs() < 1e-9);
    }

    #[test]
    fn snapshot_converts_to_uniforms() {
        let core = ViewerCore::new(&Options::default());
        let snapshot = core.snapshot();
        let frame = FrameUniform::from(&snapshot);
        assert_eq!(frame.shading, 0);
        assert_eq!(frame.light1[3], 1.0);

        let object = ObjectUniform::from(&snapshot.cubes[0]);
        assert_eq!(object.color, [1.0, 0.0, 0.0, 1.0]);
        // Translation column of the model-view.
        assert_eq!(
            Vec4::from(object.model_view[3]),
            Vec4::new(-0.75, -0.25, -4.0, 1.0)
        );
        assert_eq!(object.normal_matrix[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
