//! Vertex and index buffers for the small set of tutorial geometry.

use glam::Vec3;
use wgpu::{
    util::{BufferInitDescriptor, DeviceExt},
    Buffer, Device, IndexFormat, RenderPass,
};

use crate::graphics::{
    data::{ColoredVertex, TexturedVertex},
    instance::Instances,
};

/// Two triangles sharing the diagonal of a quad.
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Uploaded geometry that can be drawn any amount of times per frame.
pub(crate) struct Mesh {
    /// Vertex data on the GPU.
    vertex_buffer: Buffer,
    /// Index data on the GPU.
    index_buffer: Buffer,
    /// Amount of indices to draw.
    index_count: u32,
}

impl Mesh {
    /// Upload colored geometry from vertex and index lists.
    pub(crate) fn colored(device: &Device, vertices: &[ColoredVertex], indices: &[u16]) -> Self {
        Self::upload(device, bytemuck::cast_slice(vertices), indices)
    }

    /// Upload a colored square quad around the origin.
    pub(crate) fn colored_quad(device: &Device, radius: f32, color: [f32; 3]) -> Self {
        let vertices = [
            ColoredVertex::new(Vec3::new(-radius, -radius, 0.0), color),
            ColoredVertex::new(Vec3::new(-radius, radius, 0.0), color),
            ColoredVertex::new(Vec3::new(radius, radius, 0.0), color),
            ColoredVertex::new(Vec3::new(radius, -radius, 0.0), color),
        ];

        Self::colored(device, &vertices, &QUAD_INDICES)
    }

    /// Upload a textured square quad around the origin.
    ///
    /// The UV rectangle is `[u0, v0, u1, v1]` where `(u0, v0)` maps to the
    /// top left corner of the quad, so a sheet region is flipped by swapping
    /// its coordinates.
    pub(crate) fn textured_quad(device: &Device, radius: f32, uv: [f32; 4]) -> Self {
        let [u0, v0, u1, v1] = uv;
        let vertices = [
            TexturedVertex::new(Vec3::new(-radius, -radius, 0.0), u0, v1),
            TexturedVertex::new(Vec3::new(-radius, radius, 0.0), u0, v0),
            TexturedVertex::new(Vec3::new(radius, radius, 0.0), u1, v0),
            TexturedVertex::new(Vec3::new(radius, -radius, 0.0), u1, v1),
        ];

        Self::upload(device, bytemuck::cast_slice(&vertices), &QUAD_INDICES)
    }

    /// Bind the buffers and draw one copy per instance translation.
    pub(crate) fn draw_instanced<'pass>(
        &'pass self,
        render_pass: &mut RenderPass<'pass>,
        instances: &'pass Instances,
    ) {
        if instances.is_empty() {
            return;
        }

        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instances.slice());
        render_pass.set_index_buffer(self.index_buffer.slice(..), IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.index_count, 0, 0..instances.len() as u32);
    }

    /// Create the GPU buffers from raw vertex bytes.
    fn upload(device: &Device, vertex_bytes: &[u8], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: vertex_bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
