use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_generator::FractalGenerator;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_row};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData};
use crate::core::data::view_range::ViewRange;

/// Row-partitioned parallel render using rayon's work-stealing scheduler.
///
/// Each row is independent and side-effect-free, so rows render concurrently
/// and join before the frame is assembled. Output is byte-identical to
/// [`render_frame`](super::render_frame::render_frame).
pub fn render_frame_rayon<G, M>(
    range: ViewRange,
    display_size: i32,
    generator: &G,
    colour_map: &M,
) -> Result<PixelBuffer, RenderFrameError>
where
    G: FractalGenerator + Sync,
    M: ColourMap<Option<u32>> + Sync,
{
    let rows: Vec<PixelBufferData> = (0..display_size)
        .into_par_iter()
        .map(|y| render_row(range, display_size, y, generator, colour_map))
        .collect::<Result<_, _>>()?;

    let buffer: PixelBufferData = rows.concat();

    Ok(PixelBuffer::from_data(display_size, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame::render_frame;
    use crate::core::data::colour::Colour;
    use std::error::Error;

    #[derive(Debug)]
    struct StubGenerator {}

    impl FractalGenerator for StubGenerator {
        fn default_range(&self) -> ViewRange {
            ViewRange::new(-1.0, -1.0, 2.0, 2.0).expect("stub range is valid")
        }

        fn num_iterations(&self, x: f64, y: f64) -> Option<u32> {
            if x * x + y * y < 0.1 {
                None
            } else {
                Some(((x.abs() + y.abs()) * 50.0) as u32)
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<Option<u32>> for StubColourMap {
        fn map(&self, value: Option<u32>) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            match value {
                None => Ok(Colour::BLACK),
                Some(n) => Ok(Colour {
                    r: (n % 256) as u8,
                    g: 0,
                    b: 255,
                }),
            }
        }

        fn display_name(&self) -> &str {
            "Stub map"
        }
    }

    #[derive(Debug)]
    struct FailingColourMap {}

    impl ColourMap<Option<u32>> for FailingColourMap {
        fn map(&self, _: Option<u32>) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Failing map"
        }
    }

    #[test]
    fn test_rayon_generates_same_frame_as_sequential() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let sequential = render_frame(range, 16, &generator, &colour_map).unwrap();
        let parallel = render_frame_rayon(range, 16, &generator, &colour_map).unwrap();

        assert_eq!(parallel.buffer(), sequential.buffer());
    }

    #[test]
    fn test_rayon_with_single_row_display() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let sequential = render_frame(range, 1, &generator, &colour_map).unwrap();
        let parallel = render_frame_rayon(range, 1, &generator, &colour_map).unwrap();

        assert_eq!(parallel.buffer(), sequential.buffer());
    }

    #[test]
    fn test_rayon_with_large_display() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let sequential = render_frame(range, 100, &generator, &colour_map).unwrap();
        let parallel = render_frame_rayon(range, 100, &generator, &colour_map).unwrap();

        assert_eq!(parallel.buffer(), sequential.buffer());
    }

    #[test]
    fn test_rayon_propagates_colour_map_failure() {
        let generator = StubGenerator {};
        let colour_map = FailingColourMap {};
        let range = generator.default_range();

        let result = render_frame_rayon(range, 8, &generator, &colour_map);

        assert!(matches!(result, Err(RenderFrameError::ColourMap(_))));
    }
}
