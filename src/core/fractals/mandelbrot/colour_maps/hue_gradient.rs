use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;
use std::error::Error;
use std::fmt;

// hue starts in the blues and advances one full cycle every 200 iterations
const HUE_BASE: f64 = 0.6;
const ITERATIONS_PER_HUE_CYCLE: f64 = 200.0;

#[derive(Debug)]
pub enum HueGradientError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for HueGradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "escaped iteration count {} reached the budget of {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for HueGradientError {}

/// Colours escaped points along a saturated hue wheel; non-escaping points
/// are a fixed black, outside the gradient.
#[derive(Debug)]
pub struct HueGradient {
    max_iterations: u32,
}

impl HueGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<Option<u32>> for HueGradient {
    fn map(&self, iterations: Option<u32>) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        match iterations {
            None => Ok(Colour::BLACK),
            Some(n) if n >= self.max_iterations => {
                // budget exhaustion must arrive as None, never as a count
                Err(Box::new(HueGradientError::IterationsExceedMax {
                    iterations: n,
                    max_iterations: self.max_iterations,
                }))
            }
            Some(n) => {
                let hue = HUE_BASE + f64::from(n) / ITERATIONS_PER_HUE_CYCLE;
                Ok(hsv_to_rgb(hue, 1.0, 1.0))
            }
        }
    }

    fn display_name(&self) -> &str {
        "Hue gradient"
    }
}
