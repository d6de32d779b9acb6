//! Puts the composed canvas on screen
//!
//! Each frame the canvas is uploaded into one texture and drawn as a single
//! full-window quad.

pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use resources::FrameTexture;
use wgpu::*;
use winit::window::Window;

use crate::canvas::Canvas;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    pub frame_pipeline: RenderPipeline,
    pub frame_bind_group: BindGroup,
    pub frame: FrameTexture,
    pub quad: Buffer,
}

impl Renderer {
    /// `frame_width` x `frame_height` is the canvas size, independent of the
    /// window's physical size.
    pub async fn new(
        window: Arc<Window>,
        frame_width: u32,
        frame_height: u32,
    ) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;

        let frame = resources::create_frame_texture(&ctx.device, frame_width, frame_height);
        let quad = resources::create_quad(&ctx.device);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let frame_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &pipes.frame_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&frame.view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&frame.sampler),
                },
            ],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            frame_pipeline: pipes.frame_pipeline,
            frame_bind_group,
            frame,
            quad,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return; // minimised
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn present(&mut self, canvas: &Canvas) -> Result<(), SurfaceError> {
        resources::upload_canvas(&self.queue, &self.frame, canvas);

        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.frame_pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad.slice(..));
            pass.draw(0..4, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
