//! Abstractions over GPU calls which can be profiled.

use std::sync::Arc;

use miette::{Context, IntoDiagnostic, Result};
use winit::window::Window;

use crate::{graphics::PREFERRED_TEXTURE_FORMAT, GameConfig};

/// GPU state abstracted so GPU calls can be profiled if the feature flags are enabled.
pub(crate) struct Gpu {
    /// GPU device.
    pub(crate) device: wgpu::Device,
    /// GPU surface.
    pub(crate) surface: wgpu::Surface<'static>,
    /// GPU queue.
    pub(crate) queue: wgpu::Queue,
    /// GPU surface configuration.
    config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    /// Create a GPU surface on the window.
    pub(crate) async fn new(game_config: &GameConfig, window: Arc<Window>) -> Result<Self> {
        // Get a handle to our GPU
        let instance = wgpu::Instance::default();

        log::debug!("Creating GPU surface on the window");

        // Create a GPU surface on the window
        let surface = instance
            .create_surface(window)
            .into_diagnostic()
            .wrap_err("Error creating surface on window")?;

        log::debug!("Requesting adapter");

        // Request an adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                // Ensure the strongest GPU is used
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| miette::miette!("Error getting GPU adapter for window"))?;

        // Report which GPU ended up driving the window
        let adapter_info = adapter.get_info();
        log::info!(
            "Rendering with '{}' on {:?}",
            adapter_info.name,
            adapter_info.backend
        );

        // Get the surface capabilities
        let swapchain_capabilities = surface.get_capabilities(&adapter);

        // Create the logical device and command queue
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    // Lowest limits so the same code keeps working on weak GPUs
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await
            .into_diagnostic()
            .wrap_err("Error getting logical GPU device for surface")?;

        // Configure the render surface
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: PREFERRED_TEXTURE_FORMAT,
            // Will be overwritten by the first resize event
            width: game_config.buffer_width as u32,
            height: game_config.buffer_height as u32,
            present_mode: if game_config.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            desired_maximum_frame_latency: 2,
            alpha_mode: swapchain_capabilities.alpha_modes[0],
            view_formats: vec![PREFERRED_TEXTURE_FORMAT],
        };
        surface.configure(&device, &config);

        Ok(Self {
            device,
            surface,
            queue,
            config,
        })
    }

    /// Resize the surface.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resizing the surface to ({width}x{height})");

        // Ensure that the render surface is at least 1 pixel big, otherwise an error would occur
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
    }
}
