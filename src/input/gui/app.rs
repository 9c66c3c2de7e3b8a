//! Main GUI application loop.

use crate::controllers::viewer::controller::ViewerController;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
use crate::core::fractals::mandelbrot::colour_maps::hue_gradient::HueGradient;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

/// Logical window size; the surface is square and fixed at construction.
const DISPLAY_SIZE: u32 = 600;

/// Application state: the pixels presenter, the viewer controller, and the
/// egui context driving the overlay panel.
struct App {
    presenter: PixelsPresenter,
    controller: ViewerController<Mandelbrot, HueGradient>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    cursor: Option<Point>,
    redraw_pending: bool,
}

impl App {
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let presenter = PixelsPresenter::new(window);

        let size = window.inner_size();
        let controller = ViewerController::new(
            size.width as i32,
            Mandelbrot,
            HueGradient::new(Mandelbrot::MAX_ITERATIONS),
            presenter.share_sink(),
        )
        .expect("window size is positive");

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            egui_ctx,
            egui_state,
            cursor: None,
            redraw_pending: true,
        }
    }

    /// Runs the egui frame: the overlay panel with the variant name, the
    /// current view range, and the reset button.
    fn update_ui(&mut self, window: &Window) -> (egui::FullOutput, bool) {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut reset_clicked = false;

        let controller = &self.controller;
        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new(controller.display_name())
                .default_pos([10.0, 10.0])
                .show(ctx, |ui| {
                    let range = controller.range();
                    ui.label(format!(
                        "Real: [{:.4}, {:.4}]",
                        range.x(),
                        range.x() + range.width()
                    ));
                    ui.label(format!(
                        "Imag: [{:.4}, {:.4}]",
                        range.y(),
                        range.y() + range.height()
                    ));
                    ui.label("Click to zoom in");
                    ui.separator();

                    if ui.button("Reset").clicked() {
                        reset_clicked = true;
                    }
                });
        });

        (output, reset_clicked)
    }

    fn handle_window_event(
        &mut self,
        window: &'static Window,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) {
        let response = self.egui_state.on_window_event(window, event);

        match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;

                let (egui_output, reset_clicked) = self.update_ui(window);
                self.egui_state
                    .handle_platform_output(window, egui_output.platform_output.clone());

                if reset_clicked {
                    if let Err(e) = self.controller.reset_and_render() {
                        eprintln!("Render error: {e}");
                    }
                    self.redraw_pending = true;
                }

                if egui_output
                    .viewport_output
                    .values()
                    .any(|v| v.repaint_delay.is_zero())
                {
                    self.redraw_pending = true;
                }

                if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
                    eprintln!("Presenter error: {e}");
                    elwt.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Point {
                    x: position.x as i32,
                    y: position.y as i32,
                });
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !response.consumed => {
                if let Some(pixel) = self.cursor {
                    match self.controller.recenter_zoom_and_render(pixel) {
                        Ok(()) => self.redraw_pending = true,
                        // clicks just outside the surface are ignored
                        Err(e) => eprintln!("Zoom rejected: {e}"),
                    }
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = window.inner_size();
                self.presenter.resize_surface(size.width, size.height);
                self.redraw_pending = true;
            }
            _ => {
                if response.repaint {
                    self.redraw_pending = true;
                }
            }
        }
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Viewer")
            .with_inner_size(LogicalSize::new(DISPLAY_SIZE as f64, DISPLAY_SIZE as f64))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window, &event_loop);

    // the initial view, before the first user event
    app.controller.render().expect("Initial render failed");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                app.handle_window_event(window, event, elwt);
            }
            Event::AboutToWait => {
                if app.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .expect("Event loop error");
}
