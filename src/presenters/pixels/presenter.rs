use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::controllers::viewer::ports::frame_sink::FrameSinkPort;
use crate::presenters::pixels::sink::PixelsFrameSink;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::window::Window;

/// Owns the `pixels` framebuffer and the egui overlay renderer.
///
/// Fractal frames arrive through the shared [`PixelsFrameSink`]; each redraw
/// copies the newest frame into the RGBA framebuffer (if one arrived) and
/// draws the egui panel on top in the same encoder pass.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    sink: Arc<PixelsFrameSink>,
    display_size: u32,
    has_frame: bool,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            sink: Arc::new(PixelsFrameSink::new()),
            display_size: size.width,
            has_frame: false,
        }
    }

    pub fn share_sink(&self) -> Arc<dyn FrameSinkPort> {
        Arc::clone(&self.sink) as Arc<dyn FrameSinkPort>
    }

    fn draw_placeholder(&mut self) {
        let frame = self.pixels.frame_mut();
        for pixel in frame.chunks_exact_mut(4) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = 255;
        }
    }

    fn copy_newest_frame_into_framebuffer(&mut self) {
        let Some(frame) = self.sink.take_frame() else {
            return;
        };

        if frame.display_size() as u32 != self.display_size {
            return;
        }

        copy_rgb_to_rgba(frame.buffer(), self.pixels.frame_mut());
        self.has_frame = true;
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        self.copy_newest_frame_into_framebuffer();

        if !self.has_frame {
            self.draw_placeholder();
        }

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.display_size, self.display_size],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            // the scaling pass draws the fractal framebuffer first
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.pixels
                .resize_surface(width, height)
                .expect("Failed to resize surface");
        }
    }
}
