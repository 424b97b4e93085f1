//! Per-entity translations for instanced draws.

use glam::Vec3;
use wgpu::{
    util::{BufferInitDescriptor, DeviceExt},
    Buffer, BufferAddress, BufferSlice, BufferUsages, Device, Queue, VertexAttribute,
    VertexBufferLayout, VertexFormat, VertexStepMode,
};

/// Raw representation of a single instance sent to the GPU.
type Instance = [f32; 3];

/// Growable list of translations, one per drawn copy of a mesh.
///
/// The CPU side is rebuilt whenever the simulation ticked, the GPU buffer is
/// recreated only when the list outgrows it.
#[derive(Debug)]
pub(crate) struct Instances {
    /// Translations to upload this frame.
    translations: Vec<Instance>,
    /// GPU buffer the translations are uploaded to.
    buffer: Buffer,
}

impl Instances {
    /// Create an empty list with a zero-sized buffer.
    pub(crate) fn new(device: &Device) -> Self {
        let buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: &[],
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        });

        Self {
            translations: Vec::new(),
            buffer,
        }
    }

    /// Remove all translations.
    pub(crate) fn clear(&mut self) {
        self.translations.clear();
    }

    /// Push a translation to draw an instance at this frame.
    pub(crate) fn push(&mut self, translation: Vec3) {
        self.translations.push(translation.to_array());
    }

    /// Amount of instances to draw this frame.
    pub(crate) fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether there are any.
    pub(crate) fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Move the translations to the GPU, growing the buffer when needed.
    pub(crate) fn upload(&mut self, device: &Device, queue: &Queue) {
        if self.translations.is_empty() {
            return;
        }

        let bytes = bytemuck::cast_slice(&self.translations);
        if bytes.len() as BufferAddress > self.buffer.size() {
            // List outgrew the buffer, recreate it with the data in one go
            self.buffer.destroy();
            self.buffer = device.create_buffer_init(&BufferInitDescriptor {
                label: Some("Instance Buffer"),
                contents: bytes,
                usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            });
        } else {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
    }

    /// Slice of the GPU buffer to bind as the instance vertex buffer.
    pub(crate) fn slice(&self) -> BufferSlice {
        self.buffer.slice(..)
    }

    /// WGPU descriptor.
    pub(crate) const fn descriptor() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &[VertexAttribute {
                format: VertexFormat::Float32x3,
                offset: 0,
                // Must be the next one after the vertex attributes
                shader_location: 2,
            }],
        }
    }
}
