pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod scene;
pub mod shaders;

use std::sync::Arc;

use game_core::Config;
use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use resources::GameBuffers;
use scene::Frame;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// The camera covers the logical screen, so the surface can be any
    /// physical size (HiDPI scaling included)
    pub async fn new(window: Arc<Window>, config: &Config) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(config.screen_width as f32, config.screen_height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, CIRCLE_SEGMENTS);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        log::info!(
            "Renderer ready: {}x{} surface, {:?}",
            ctx.size.0,
            ctx.size.1,
            ctx.config.format
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            // Minimised
            return;
        }
        log::debug!("Resizing surface to {width}x{height}");
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn render(&mut self, frame: &Frame) -> anyhow::Result<()> {
        draw::draw_frame(self, frame)
    }
}
