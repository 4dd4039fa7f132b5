//! Ground and cube geometry, and their GPU buffers.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

/// Interleaved vertex: position, normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate in `[0, 1]²`.
    pub tex_coord: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    /// Vertex buffer layout matching the scene shader's inputs.
    #[must_use]
    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side indexed triangle list. Triangles wind counter-clockwise when
/// seen from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertices.
    pub vertices: Vec<Vertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Append a quad with corners `center ± u ± v`, facing `u × v`.
    fn push_quad(&mut self, center: Vec3, u: Vec3, v: Vec3) {
        let normal = u.cross(v).normalize().to_array();
        let base = self.vertices.len() as u16;
        let corners = [
            (center - u - v, [0.0, 0.0]),
            (center + u - v, [1.0, 0.0]),
            (center + u + v, [1.0, 1.0]),
            (center - u + v, [0.0, 1.0]),
        ];
        for (position, tex_coord) in corners {
            self.vertices.push(Vertex {
                position: position.to_array(),
                normal,
                tex_coord,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Axis-aligned cube of edge `size`, centred on the origin, with one quad
/// per face so each face has flat normals.
#[must_use]
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    // (outward normal, u, v) with u × v = normal.
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        mesh.push_quad(normal * h, u * h, v * h);
    }
    mesh
}

/// Square ground plane at height `y` with half-extent `half_size`, facing
/// up.
#[must_use]
pub fn ground(y: f32, half_size: f32) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_quad(
        Vec3::new(0.0, y, 0.0),
        Vec3::Z * half_size,
        Vec3::X * half_size,
    );
    mesh
}

/// Vertex and index buffers for one mesh.
pub struct GpuMesh {
    /// Vertex buffer.
    pub vertex_buffer: wgpu::Buffer,
    /// `u16` index buffer.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload mesh data.
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertices")),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }

    /// Bind the buffers and issue the indexed draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_normal(mesh: &MeshData, t: usize) -> Vec3 {
        let p = |i: usize| Vec3::from(mesh.vertices[mesh.indices[i] as usize].position);
        let (a, b, c) = (p(3 * t), p(3 * t + 1), p(3 * t + 2));
        (b - a).cross(c - a)
    }

    #[test]
    fn cube_counts() {
        let mesh = cube(1.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < 24));
    }

    #[test]
    fn cube_spans_its_size() {
        let mesh = cube(2.0);
        for v in &mesh.vertices {
            for c in v.position {
                assert!((c.abs() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn cube_normals_point_outward() {
        let mesh = cube(1.0);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            // The normal's axis carries the face's half-size coordinate.
            assert!((p.dot(n) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_winds_counter_clockwise_from_outside() {
        let mesh = cube(1.0);
        for t in 0..12 {
            let n = Vec3::from(mesh.vertices[mesh.indices[3 * t] as usize].normal);
            assert!(triangle_normal(&mesh, t).dot(n) > 0.0);
        }
    }

    #[test]
    fn ground_faces_up_at_height() {
        let mesh = ground(-2.0, 10.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        for v in &mesh.vertices {
            assert_eq!(v.position[1], -2.0);
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
            assert_eq!(v.position[0].abs(), 10.0);
        }
        assert!(triangle_normal(&mesh, 0).y > 0.0);
        assert!(triangle_normal(&mesh, 1).y > 0.0);
    }
}
