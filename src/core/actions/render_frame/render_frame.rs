use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_generator::FractalGenerator;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::view_range::ViewRange;
use crate::core::util::map_pixel_to_plane::{MapPixelToPlaneError, map_pixel_to_plane};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    Coords(MapPixelToPlaneError),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coords(err) => write!(f, "coordinate mapping error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coords(err) => Some(err),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MapPixelToPlaneError> for RenderFrameError {
    fn from(err: MapPixelToPlaneError) -> Self {
        Self::Coords(err)
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one row of the frame: three RGB bytes per pixel.
pub(crate) fn render_row<G, M>(
    range: ViewRange,
    display_size: i32,
    row: i32,
    generator: &G,
    colour_map: &M,
) -> Result<PixelBufferData, RenderFrameError>
where
    G: FractalGenerator,
    M: ColourMap<Option<u32>>,
{
    let y_plane = map_pixel_to_plane(
        range.y(),
        range.y() + range.height(),
        display_size,
        row,
    )?;

    let mut bytes: PixelBufferData = Vec::with_capacity((display_size as usize) * 3);

    for x in 0..display_size {
        let x_plane = map_pixel_to_plane(range.x(), range.x() + range.width(), display_size, x)?;
        let iterations = generator.num_iterations(x_plane, y_plane);
        let colour = colour_map
            .map(iterations)
            .map_err(RenderFrameError::ColourMap)?;

        bytes.push(colour.r);
        bytes.push(colour.g);
        bytes.push(colour.b);
    }

    Ok(bytes)
}

/// Renders every pixel of a square display into an RGB frame.
///
/// Full recomputation on every call: no pixel is skipped, none is memoized
/// between invocations. For the row-partitioned parallel variant, see
/// [`render_frame_rayon`](super::render_frame_rayon::render_frame_rayon).
pub fn render_frame<G, M>(
    range: ViewRange,
    display_size: i32,
    generator: &G,
    colour_map: &M,
) -> Result<PixelBuffer, RenderFrameError>
where
    G: FractalGenerator,
    M: ColourMap<Option<u32>>,
{
    let mut buffer: PixelBufferData =
        Vec::with_capacity((display_size.max(0) as usize).pow(2) * 3);

    for y in 0..display_size {
        buffer.extend(render_row(range, display_size, y, generator, colour_map)?);
    }

    Ok(PixelBuffer::from_data(display_size, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[derive(Debug)]
    struct StubGenerator {}

    impl FractalGenerator for StubGenerator {
        fn default_range(&self) -> ViewRange {
            ViewRange::new(0.0, 0.0, 1.0, 1.0).expect("stub range is valid")
        }

        fn num_iterations(&self, x: f64, y: f64) -> Option<u32> {
            // deterministic, coordinate-dependent, with a non-escape stripe
            if y < 0.25 {
                None
            } else {
                Some((x * 100.0) as u32 + (y * 100.0) as u32)
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
                    g: (n / 256 % 256) as u8,
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
    fn test_every_pixel_receives_exactly_one_colour() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let frame = render_frame(range, 8, &generator, &colour_map).unwrap();

        assert_eq!(frame.display_size(), 8);
        assert_eq!(frame.buffer_size(), 8 * 8 * 3);
    }

    #[test]
    fn test_first_pixel_samples_range_origin() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let frame = render_frame(range, 8, &generator, &colour_map).unwrap();

        // (0, 0) maps to plane (0, 0), which the stub paints black
        assert_eq!(&frame.buffer()[0..3], &[0, 0, 0]);
    }

    #[test]
    fn test_rows_past_the_stripe_are_coloured() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let frame = render_frame(range, 8, &generator, &colour_map).unwrap();

        // last row samples y_plane = 7/8, well past the stripe
        let last_row_start = 7 * 8 * 3;
        assert_eq!(frame.buffer()[last_row_start + 2], 255);
    }

    #[test]
    fn test_colour_map_failure_propagates() {
        let generator = StubGenerator {};
        let colour_map = FailingColourMap {};
        let range = generator.default_range();

        let result = render_frame(range, 4, &generator, &colour_map);

        assert!(matches!(result, Err(RenderFrameError::ColourMap(_))));
    }

    #[test]
    fn test_non_positive_display_size_fails() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let result = render_frame(range, 0, &generator, &colour_map);

        assert!(matches!(result, Err(RenderFrameError::PixelBuffer(_))));
    }

    #[test]
    fn test_render_is_deterministic_across_calls() {
        let generator = StubGenerator {};
        let colour_map = StubColourMap {};
        let range = generator.default_range();

        let first = render_frame(range, 8, &generator, &colour_map).unwrap();
        let second = render_frame(range, 8, &generator, &colour_map).unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }
}
