//! Animated sprite sheets drawn at a batch of positions per frame.

use std::path::Path;

use glam::Vec3;
use miette::Result;
use wgpu::RenderPass;

use crate::graphics::{instance::Instances, mesh::Mesh, texture::Texture, Frame, Graphics};

/// Quad and batch for one animation frame of a sheet.
struct SpriteFrame {
    /// Quad with the UV rectangle of this frame.
    mesh: Mesh,
    /// Translations of every entity currently showing this frame.
    instances: Instances,
}

/// Sprite sheet with one quad per animation frame.
///
/// Entities on the same frame are drawn in one instanced call, so a whole
/// formation costs as many draws as the sheet has frames. Drawn with a
/// program from [`crate::ShaderProgram::textured`].
pub struct Sprite {
    /// The sheet all frames sample from.
    texture: Texture,
    /// One batch per animation frame.
    frames: Vec<SpriteFrame>,
}

impl Sprite {
    /// Load a sheet and cut quads for its animation frames.
    ///
    /// Every frame is a `[u0, v0, u1, v1]` rectangle in UV space mapped onto
    /// a square quad of the given radius.
    ///
    /// # Errors
    ///
    /// - When the texture cannot be loaded, see [`Texture::load`].
    pub fn new(
        graphics: &Graphics,
        path: impl AsRef<Path>,
        radius: f32,
        frame_uvs: &[[f32; 4]],
    ) -> Result<Self> {
        let device = &graphics.gpu.device;

        let texture = Texture::load(graphics, path)?;

        let frames = frame_uvs
            .iter()
            .map(|&uv| SpriteFrame {
                mesh: Mesh::textured_quad(device, radius, uv),
                instances: Instances::new(device),
            })
            .collect();

        Ok(Self { texture, frames })
    }

    /// Remove all positions batched for this frame.
    pub fn clear(&mut self) {
        for frame in &mut self.frames {
            frame.instances.clear();
        }
    }

    /// Batch an entity showing the given animation frame at the position.
    ///
    /// Frames the sheet was not cut for are ignored.
    #[inline]
    pub fn push(&mut self, animation_frame: usize, position: Vec3) {
        if let Some(frame) = self.frames.get_mut(animation_frame) {
            frame.instances.push(position);
        }
    }

    /// Move the batched positions to the GPU, must happen before the render pass.
    pub fn upload(&mut self, target: &Frame) {
        for frame in &mut self.frames {
            frame.instances.upload(target.device, target.queue);
        }
    }

    /// Draw every batch with the sheet bound at group 1.
    pub fn draw<'pass>(&'pass self, render_pass: &mut RenderPass<'pass>) {
        render_pass.set_bind_group(1, self.texture.bind_group(), &[]);

        for frame in &self.frames {
            frame.mesh.draw_instanced(render_pass, &frame.instances);
        }
    }
}
