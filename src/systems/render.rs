//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Edge line pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use hypercube_core::ProjectedFrame;
use hypercube_render::{
    context::{ContextError, RenderContext},
    EdgeGeometry, LinePipeline, LineUniforms, OrbitCamera,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    render_config: RenderingConfig,
    center_w: f32,
    w_range: f32,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `center_w` and `w_range` describe where rotated `w` values fall, for
    /// edge tinting.
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
        center_w: f32,
        w_range: f32,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let line_pipeline = LinePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            line_pipeline,
            render_config,
            center_w,
            w_range,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Upload the edges of a new frame
    pub fn upload_frame(&mut self, frame: &ProjectedFrame) {
        let geometry = EdgeGeometry::from_frame(
            frame,
            self.render_config.edge_color,
            self.render_config.w_color_strength,
            self.center_w,
            self.w_range,
        );
        self.line_pipeline
            .upload_vertices(&self.context.queue, &geometry.vertices);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, camera: &OrbitCamera) -> Result<(), RenderError> {
        let uniforms = LineUniforms {
            view_projection: camera.view_projection(self.context.aspect_ratio()),
        };
        self.line_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.line_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
