//! Sprite sheet textures decoded from PNG files.

use std::{fs::File, io::BufReader, path::Path};

use miette::{Context, IntoDiagnostic, Result};
use png::{BitDepth, ColorType, Decoder, Transformations};
use wgpu::{
    AddressMode, BindGroup, BindGroupDescriptor, BindGroupEntry, BindingResource, Extent3d,
    FilterMode, ImageCopyTexture, ImageDataLayout, Origin3d, SamplerDescriptor, TextureAspect,
    TextureDescriptor, TextureDimension, TextureUsages, TextureViewDescriptor,
};

use crate::graphics::{Graphics, PREFERRED_TEXTURE_FORMAT};

/// Sprite sheet uploaded to the GPU, bound as a whole.
///
/// Sub-rectangles are selected by the UV coordinates of the mesh drawn with
/// it, never by the texture itself.
pub struct Texture {
    /// Bind group tying the texture view and its sampler together.
    bind_group: BindGroup,
}

impl Texture {
    /// Decode a PNG file and upload it.
    ///
    /// The decoder normalizes every input to 8 bit and adds an alpha channel,
    /// anything that still decodes to a different format is rejected.
    ///
    /// # Errors
    ///
    /// - When the file cannot be read.
    /// - When the PNG cannot be decoded.
    /// - When the decoded image is not 8 bit RGBA.
    pub fn load(graphics: &Graphics, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let device = &graphics.gpu.device;

        log::debug!("Loading texture '{}'", path.display());

        let file = File::open(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error opening texture file '{}'", path.display()))?;

        // Decode the PNG into a fixed format
        let mut decoder = Decoder::new(BufReader::new(file));
        decoder.set_transformations(Transformations::normalize_to_color8() | Transformations::ALPHA);

        let mut reader = decoder
            .read_info()
            .into_diagnostic()
            .wrap_err_with(|| format!("Error decoding texture header of '{}'", path.display()))?;

        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut pixels)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error decoding texture pixels of '{}'", path.display()))?;

        miette::ensure!(
            info.color_type == ColorType::Rgba && info.bit_depth == BitDepth::Eight,
            "Texture '{}' did not decode to 8 bit RGBA",
            path.display(),
        );

        let size = Extent3d {
            width: info.width,
            height: info.height,
            depth_or_array_layers: 1,
        };

        // Create the texture on the GPU
        let texture = device.create_texture(&TextureDescriptor {
            label: Some("Sprite Sheet Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: PREFERRED_TEXTURE_FORMAT,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });

        // Upload the pixels
        graphics.gpu.queue.write_texture(
            ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            &pixels[..info.buffer_size()],
            ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * info.width),
                rows_per_image: Some(info.height),
            },
            size,
        );

        let view = texture.create_view(&TextureViewDescriptor::default());

        // Pixel art, always sample the nearest texel
        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("Sprite Sheet Sampler"),
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            address_mode_w: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Sprite Sheet Bind Group"),
            layout: &graphics.texture_bind_group_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&sampler),
                },
            ],
        });

        Ok(Self { bind_group })
    }

    /// Bind group to set for drawing with this sheet.
    pub(crate) const fn bind_group(&self) -> &BindGroup {
        &self.bind_group
    }
}
