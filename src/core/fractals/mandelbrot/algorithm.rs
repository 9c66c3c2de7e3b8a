use crate::core::actions::render_frame::ports::fractal_generator::FractalGenerator;
use crate::core::data::complex::Complex;
use crate::core::data::view_range::ViewRange;

/// The Mandelbrot set: z ← z² + c from z = 0, escape at |z|² ≥ 4.
#[derive(Debug, Default, Copy, Clone)]
pub struct Mandelbrot;

impl Mandelbrot {
    /// Iteration budget before a point is presumed to belong to the set.
    pub const MAX_ITERATIONS: u32 = 2500;

    const ESCAPE_MAGNITUDE_SQUARED: f64 = 4.0;
}

impl FractalGenerator for Mandelbrot {
    fn default_range(&self) -> ViewRange {
        ViewRange::new(-3.0, -1.7, 4.0, 4.0).expect("default mandelbrot range is valid")
    }

    fn num_iterations(&self, x: f64, y: f64) -> Option<u32> {
        let c = Complex { real: x, imag: y };
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while iterations < Self::MAX_ITERATIONS
            && z.magnitude_squared() < Self::ESCAPE_MAGNITUDE_SQUARED
        {
            z = z * z + c;
            iterations += 1;
        }

        if iterations == Self::MAX_ITERATIONS {
            None
        } else {
            Some(iterations)
        }
    }

    fn display_name(&self) -> &str {
        "Mandelbrot"
    }
}
