use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::ports::fractal_generator::FractalGenerator;
use crate::core::actions::render_frame::render_frame::RenderFrameError;
use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
use crate::core::fractals::mandelbrot::colour_maps::hue_gradient::HueGradient;
use std::path::Path;
use std::time::Instant;

const DISPLAY_SIZE: i32 = 600;

/// Headless controller: renders the default Mandelbrot view once and writes
/// it through a file presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), RenderFrameError> {
        let generator = Mandelbrot;
        let colour_map = HueGradient::new(Mandelbrot::MAX_ITERATIONS);
        let range = generator.default_range();

        println!("Rendering {} set...", generator.display_name());
        println!("Image size: {}x{}", DISPLAY_SIZE, DISPLAY_SIZE);
        println!("Max iterations: {}", Mandelbrot::MAX_ITERATIONS);

        let start = Instant::now();
        let frame = render_frame_rayon(range, DISPLAY_SIZE, &generator, &colour_map)?;
        println!("Duration: {:?}", start.elapsed());

        self.frame = Some(frame);
        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(frame) = &self.frame else {
            return Err(std::io::Error::other("no frame generated yet"));
        };

        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        self.presenter.present(frame, &filepath)?;
        println!("Saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
