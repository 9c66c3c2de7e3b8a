mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::copy_rgb_to_rgba;
pub use crate::controllers::cli::controller::CliController;
pub use crate::controllers::viewer::controller::ViewerController;
pub use crate::controllers::viewer::ports::frame_sink::FrameSinkPort;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_generator::FractalGenerator;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::view_range::ViewRange;
pub use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
pub use crate::core::fractals::mandelbrot::colour_maps::hue_gradient::HueGradient;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::app::run_gui;
