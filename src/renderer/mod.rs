//! Scene rendering: one pipeline drawing the ground and two cubes.

/// Ground and cube geometry.
pub mod mesh;
/// Frame read-back and PPM encoding.
pub mod screenshot;
/// GPU uniform layouts.
pub mod uniforms;

use wgpu::util::DeviceExt;

use self::{
    mesh::{GpuMesh, Vertex},
    uniforms::{FrameUniform, ObjectUniform},
};
use crate::{
    engine::core::RenderSnapshot,
    gpu::{
        pipeline_helpers::{
            create_mesh_pipeline, uniform_bind_group, uniform_layout,
        },
        texture::DepthTarget,
    },
    options::SceneOptions,
};

const SHADER_SOURCE: &str = include_str!("../../assets/shaders/scene.wgsl");

/// A uniform buffer and the bind group exposing it.
struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSlot {
    fn new<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::BindGroupLayout,
        initial: &T,
    ) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::bytes_of(initial),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = uniform_bind_group(device, label, layout, &buffer);
        Self { buffer, bind_group }
    }

    fn write<T: bytemuck::Pod>(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }
}

/// GPU resources for drawing a [`RenderSnapshot`].
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    frame: UniformSlot,
    ground: UniformSlot,
    cubes: [UniformSlot; 2],
    ground_mesh: GpuMesh,
    cube_mesh: GpuMesh,
    depth: DepthTarget,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    /// Build the pipeline and upload the static geometry.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        (width, height): (u32, u32),
        scene: &SceneOptions,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });
        let frame_layout = uniform_layout(device, "Frame Layout");
        let object_layout = uniform_layout(device, "Object Layout");
        let pipeline = create_mesh_pipeline(
            device,
            "Scene",
            &shader,
            format,
            Vertex::layout(),
            &[&frame_layout, &object_layout],
        );

        let zero_object = ObjectUniform::default();
        let [r, g, b] = scene.clear_color;
        Self {
            pipeline,
            frame: UniformSlot::new(
                device,
                "Frame Uniform",
                &frame_layout,
                &FrameUniform::default(),
            ),
            ground: UniformSlot::new(
                device,
                "Ground Uniform",
                &object_layout,
                &zero_object,
            ),
            cubes: [
                UniformSlot::new(
                    device,
                    "Object 1 Uniform",
                    &object_layout,
                    &zero_object,
                ),
                UniformSlot::new(
                    device,
                    "Object 2 Uniform",
                    &object_layout,
                    &zero_object,
                ),
            ],
            ground_mesh: GpuMesh::new(
                device,
                "Ground",
                &mesh::ground(scene.ground_y, scene.ground_size),
            ),
            cube_mesh: GpuMesh::new(
                device,
                "Cube",
                &mesh::cube(scene.cube_size),
            ),
            depth: DepthTarget::new(device, width, height),
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        }
    }

    /// Resize the depth buffer.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth.ensure_size(device, width, height);
    }

    /// Upload per-frame and per-drawable uniforms.
    pub fn prepare(&self, queue: &wgpu::Queue, snapshot: &RenderSnapshot) {
        self.frame.write(queue, &FrameUniform::from(snapshot));
        self.ground
            .write(queue, &ObjectUniform::from(&snapshot.ground));
        for (slot, item) in self.cubes.iter().zip(&snapshot.cubes) {
            slot.write(queue, &ObjectUniform::from(item));
        }
    }

    /// Record the scene pass into `target`, clearing colour and depth.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(0.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.frame.bind_group, &[]);

        pass.set_bind_group(1, &self.ground.bind_group, &[]);
        self.ground_mesh.draw(&mut pass);
        for slot in &self.cubes {
            pass.set_bind_group(1, &slot.bind_group, &[]);
            self.cube_mesh.draw(&mut pass);
        }
    }
}
