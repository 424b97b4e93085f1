//! Render pipelines built from a vertex and a fragment shader source file.

use std::{borrow::Cow, fs, path::Path};

use miette::{Context, IntoDiagnostic, Result};
use wgpu::{
    BlendState, ColorTargetState, ColorWrites, Device, ErrorFilter, FragmentState, FrontFace,
    MultisampleState, PipelineCompilationOptions, PipelineLayoutDescriptor, PrimitiveState,
    PrimitiveTopology, RenderPass, RenderPipeline, RenderPipelineDescriptor, ShaderModule,
    ShaderModuleDescriptor, ShaderSource, VertexBufferLayout, VertexState,
};

use crate::graphics::{
    data::{ColoredVertex, TexturedVertex},
    instance::Instances,
    Graphics, PREFERRED_TEXTURE_FORMAT,
};

/// Complete render pipeline compiled from two WGSL files on disk.
///
/// The vertex entry point is `vs_main`, the fragment entry point `fs_main`.
pub struct ShaderProgram {
    /// The compiled pipeline.
    pipeline: RenderPipeline,
}

impl ShaderProgram {
    /// Compile a program drawing colored geometry.
    ///
    /// The vertex layout is [`ColoredVertex`] plus an instance translation,
    /// the only binding is the camera at group 0.
    ///
    /// # Errors
    ///
    /// - When a source file cannot be read.
    /// - When a shader fails to compile or the pipeline fails to validate.
    pub fn flat(
        graphics: &Graphics,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::new(
            graphics,
            vertex_path.as_ref(),
            fragment_path.as_ref(),
            ColoredVertex::descriptor(),
            &[&graphics.camera.bind_group_layout],
        )
    }

    /// Compile a program drawing textured geometry.
    ///
    /// The vertex layout is [`TexturedVertex`] plus an instance translation,
    /// with the camera at group 0 and a texture with its sampler at group 1.
    ///
    /// # Errors
    ///
    /// - When a source file cannot be read.
    /// - When a shader fails to compile or the pipeline fails to validate.
    pub fn textured(
        graphics: &Graphics,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::new(
            graphics,
            vertex_path.as_ref(),
            fragment_path.as_ref(),
            TexturedVertex::descriptor(),
            &[
                &graphics.camera.bind_group_layout,
                &graphics.texture_bind_group_layout,
            ],
        )
    }

    /// Make this program current for every following draw on the pass.
    #[inline]
    pub fn bind<'pass>(&'pass self, render_pass: &mut RenderPass<'pass>) {
        render_pass.set_pipeline(&self.pipeline);
    }

    /// Compile both source files and link them into a pipeline.
    fn new(
        graphics: &Graphics,
        vertex_path: &Path,
        fragment_path: &Path,
        vertex_layout: VertexBufferLayout<'_>,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> Result<Self> {
        let device = &graphics.gpu.device;

        let vertex_module = compile_shader(device, vertex_path)?;
        let fragment_module = compile_shader(device, fragment_path)?;

        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Shader Program Pipeline Layout"),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

        // Catch validation problems, like entry points not matching the
        // layouts, as an error value instead of a panicking callback
        device.push_error_scope(ErrorFilter::Validation);

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Shader Program Render Pipeline"),
            layout: Some(&layout),
            vertex: VertexState {
                module: &vertex_module,
                entry_point: "vs_main",
                compilation_options: PipelineCompilationOptions::default(),
                buffers: &[vertex_layout, Instances::descriptor()],
            },
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                front_face: FrontFace::Cw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            fragment: Some(FragmentState {
                module: &fragment_module,
                entry_point: "fs_main",
                compilation_options: PipelineCompilationOptions::default(),
                targets: &[Some(ColorTargetState {
                    format: PREFERRED_TEXTURE_FORMAT,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(miette::miette!(
                "Error linking shader program from '{}' and '{}': {error}",
                vertex_path.display(),
                fragment_path.display(),
            ));
        }

        Ok(Self { pipeline })
    }
}

/// Compile a single WGSL file into a shader module.
fn compile_shader(device: &Device, path: &Path) -> Result<ShaderModule> {
    let source = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Error reading shader source '{}'", path.display()))?;

    let label = path.display().to_string();

    device.push_error_scope(ErrorFilter::Validation);

    let module = device.create_shader_module(ShaderModuleDescriptor {
        label: Some(&label),
        source: ShaderSource::Wgsl(Cow::Owned(source)),
    });

    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(miette::miette!(
            "Error compiling shader '{}': {error}",
            path.display(),
        ));
    }

    Ok(module)
}
