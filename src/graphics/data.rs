//! Plain structures passed to the GPU.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// Vertex with an interpolated color, for untextured geometry.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Position in world units, relative to the instance translation.
    position: [f32; 3],
    /// RGB color interpolated across the triangle.
    color: [f32; 3],
}

impl ColoredVertex {
    /// Combine a position with a color.
    #[inline]
    #[must_use]
    pub const fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color,
        }
    }

    /// WGPU descriptor with the attributes at shader locations 0 and 1.
    pub(crate) const fn descriptor() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    format: VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                VertexAttribute {
                    format: VertexFormat::Float32x3,
                    offset: std::mem::size_of::<[f32; 3]>() as BufferAddress,
                    shader_location: 1,
                },
            ],
        }
    }
}

/// Vertex with a texture coordinate, for sprite quads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    /// Position in world units, relative to the instance translation.
    position: [f32; 3],
    /// UV coordinate into the bound texture.
    uv: [f32; 2],
}

impl TexturedVertex {
    /// Combine a position with a UV coordinate.
    #[inline]
    #[must_use]
    pub const fn new(position: Vec3, u: f32, v: f32) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            uv: [u, v],
        }
    }

    /// WGPU descriptor with the attributes at shader locations 0 and 1.
    pub(crate) const fn descriptor() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    format: VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                VertexAttribute {
                    format: VertexFormat::Float32x2,
                    offset: std::mem::size_of::<[f32; 3]>() as BufferAddress,
                    shader_location: 1,
                },
            ],
        }
    }
}

/// Orthographic projection uploaded once as the camera uniform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub(crate) struct CameraUniform {
    /// Column-major projection matrix.
    projection: Mat4,
}

impl CameraUniform {
    /// Project world units with the origin in the bottom left corner.
    pub(crate) fn orthographic(width: f32, height: f32) -> Self {
        Self {
            projection: Mat4::orthographic_rh(0.0, width, 0.0, height, -1.0, 1.0),
        }
    }
}
