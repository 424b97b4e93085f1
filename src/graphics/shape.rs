//! Colored geometry drawn at a batch of positions.

use glam::Vec3;
use wgpu::RenderPass;

use crate::graphics::{data::ColoredVertex, instance::Instances, mesh::Mesh, Frame, Graphics};

/// One colored mesh with the positions to draw it at this frame.
///
/// Drawn with a program from [`crate::ShaderProgram::flat`].
pub struct Shape {
    /// Geometry shared by all instances.
    mesh: Mesh,
    /// Translations to draw the mesh at.
    instances: Instances,
}

impl Shape {
    /// Create a square quad around the origin with a single color.
    #[must_use]
    pub fn quad(graphics: &Graphics, radius: f32, color: [f32; 3]) -> Self {
        let device = &graphics.gpu.device;

        Self {
            mesh: Mesh::colored_quad(device, radius, color),
            instances: Instances::new(device),
        }
    }

    /// Create arbitrary colored geometry from vertex and index lists.
    #[must_use]
    pub fn from_vertices(
        graphics: &Graphics,
        vertices: &[ColoredVertex],
        indices: &[u16],
    ) -> Self {
        let device = &graphics.gpu.device;

        Self {
            mesh: Mesh::colored(device, vertices, indices),
            instances: Instances::new(device),
        }
    }

    /// Remove all positions batched for this frame.
    #[inline]
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Batch a copy of the mesh at the position.
    #[inline]
    pub fn push(&mut self, position: Vec3) {
        self.instances.push(position);
    }

    /// Move the batched positions to the GPU, must happen before the render pass.
    #[inline]
    pub fn upload(&mut self, frame: &Frame) {
        self.instances.upload(frame.device, frame.queue);
    }

    /// Draw every batched copy in one instanced call.
    #[inline]
    pub fn draw<'pass>(&'pass self, render_pass: &mut RenderPass<'pass>) {
        self.mesh.draw_instanced(render_pass, &self.instances);
    }
}
