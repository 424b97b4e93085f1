//! Types and helpers for drawing on the GPU.

pub(crate) mod data;
pub(crate) mod gpu;
pub(crate) mod instance;
pub(crate) mod mesh;
pub(crate) mod program;
pub(crate) mod shape;
pub(crate) mod sprite;
pub(crate) mod texture;
pub(crate) mod uniform;

use std::sync::Arc;

use miette::Result;
use wgpu::{
    BindGroup, BindGroupLayout, BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingType,
    Color, CommandEncoder, CommandEncoderDescriptor, LoadOp, Operations,
    RenderPassColorAttachment, RenderPassDescriptor, SamplerBindingType, ShaderStages, StoreOp,
    SurfaceTexture, TextureSampleType, TextureView, TextureViewDescriptor, TextureViewDimension,
};
use winit::window::Window;

pub use self::{
    data::{ColoredVertex, TexturedVertex},
    program::ShaderProgram,
    shape::Shape,
    sprite::Sprite,
    texture::Texture,
};

use crate::{
    graphics::{data::CameraUniform, gpu::Gpu, uniform::UniformState},
    GameConfig,
};

/// Texture format the surface and all uploaded textures prefer.
pub(crate) const PREFERRED_TEXTURE_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Rgba8UnormSrgb;

/// GPU state shared by everything that draws.
///
/// Owns the surface, the world projection and the bind group layout all
/// sprite sheets are created with.
pub struct Graphics {
    /// Window the surface is created on.
    window: Arc<Window>,
    /// Device, queue, surface and its configuration.
    pub(crate) gpu: Gpu,
    /// Orthographic world projection, bound at group 0 of every program.
    pub(crate) camera: UniformState<CameraUniform>,
    /// Layout shared by every loaded sprite sheet.
    pub(crate) texture_bind_group_layout: BindGroupLayout,
    /// Color the frame is cleared with.
    background: Color,
}

impl Graphics {
    /// Set up the GPU for the window.
    pub(crate) async fn new(config: &GameConfig, window: Arc<Window>) -> Result<Self> {
        let gpu = Gpu::new(config, Arc::clone(&window)).await?;

        // World projection with the origin in the bottom left corner,
        // independent of the actual window size
        let camera = UniformState::new(
            &gpu.device,
            &CameraUniform::orthographic(config.buffer_width, config.buffer_height),
        );

        // All sprite sheets share a single layout, a view with its sampler
        let texture_bind_group_layout =
            gpu.device
                .create_bind_group_layout(&BindGroupLayoutDescriptor {
                    label: Some("Texture Bind Group Layout"),
                    entries: &[
                        BindGroupLayoutEntry {
                            binding: 0,
                            visibility: ShaderStages::FRAGMENT,
                            ty: BindingType::Texture {
                                sample_type: TextureSampleType::Float { filterable: true },
                                view_dimension: TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        BindGroupLayoutEntry {
                            binding: 1,
                            visibility: ShaderStages::FRAGMENT,
                            ty: BindingType::Sampler(SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let background = u32_to_wgpu_color(config.background_color);

        Ok(Self {
            window,
            gpu,
            camera,
            texture_bind_group_layout,
            background,
        })
    }

    /// Start a new rendering event.
    pub(crate) fn begin(&mut self) -> Frame {
        profiling::scope!("Create command encoder");

        // Create the encoder
        let encoder = self
            .gpu
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Stage Command Encoder"),
            });

        // Get the main render texture
        let surface_texture = {
            profiling::scope!("Retrieve surface texture");

            self.gpu
                .surface
                .get_current_texture()
                .expect("Error acquiring next swap chain texture")
        };

        // Create a texture view from the main render texture
        let surface_view = surface_texture
            .texture
            .create_view(&TextureViewDescriptor::default());

        Frame {
            encoder,
            surface_view,
            surface_texture,
            device: &self.gpu.device,
            queue: &self.gpu.queue,
            camera_bind_group: &self.camera.bind_group,
            background: self.background,
        }
    }

    /// Resize the surface, the projection keeps its configured size.
    #[inline]
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Window the surface is created on.
    #[inline]
    pub(crate) fn window(&self) -> &Window {
        &self.window
    }
}

/// Rendering state for a single frame.
pub struct Frame<'gpu> {
    /// GPU command encoder.
    encoder: CommandEncoder,
    /// GPU surface view.
    surface_view: TextureView,
    /// GPU surface texture.
    surface_texture: SurfaceTexture,
    /// GPU device.
    pub(crate) device: &'gpu wgpu::Device,
    /// GPU queue.
    pub(crate) queue: &'gpu wgpu::Queue,
    /// Camera bind group set at group 0 when a pass starts.
    camera_bind_group: &'gpu BindGroup,
    /// Color the pass clears with.
    background: Color,
}

impl<'gpu> Frame<'gpu> {
    /// Open the render pass, clearing the frame to the background color.
    ///
    /// The camera is already bound at group 0 when this returns. All uploads
    /// for the frame must happen before this call.
    pub fn pass(&mut self) -> wgpu::RenderPass<'_> {
        let mut render_pass = self.encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Stage Render Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &self.surface_view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(self.background),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, self.camera_bind_group, &[]);

        render_pass
    }

    /// Finish rendering event.
    #[inline]
    pub(crate) fn present(self) {
        // Draw to the texture
        {
            profiling::scope!("Submit queue");

            self.queue.submit(Some(self.encoder.finish()));
        }

        // Show the texture in the window
        {
            profiling::scope!("Present surface texture");

            self.surface_texture.present();
        }
    }
}

/// Convert an `u32` color to a WGPU [`wgpu::Color`] taking in account sRGB.
fn u32_to_wgpu_color(argb: u32) -> Color {
    let a = ((argb & 0xFF00_0000) >> 24) as f64 / 255.0;
    let r = ((argb & 0x00FF_0000) >> 16) as f64 / 255.0;
    let g = ((argb & 0x0000_FF00) >> 8) as f64 / 255.0;
    let b = (argb & 0x0000_00FF) as f64 / 255.0;

    if PREFERRED_TEXTURE_FORMAT.is_srgb() {
        // Convert to sRGB space
        Color {
            a: a.powf(2.2),
            r: r.powf(2.2),
            g: g.powf(2.2),
            b: b.powf(2.2),
        }
    } else {
        Color { a, r, g, b }
    }
}
