use crate::controllers::viewer::ports::frame_sink::FrameSinkPort;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_generator::FractalGenerator;
use crate::core::actions::render_frame::render_frame::RenderFrameError;
use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
use crate::core::data::point::Point;
use crate::core::data::view_range::{ViewRange, ViewRangeError};
use crate::core::util::map_pixel_to_plane::{MapPixelToPlaneError, map_pixel_to_plane};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Every click zooms in by halving the visible rectangle.
const ZOOM_SCALE: f64 = 0.5;

#[derive(Debug)]
pub enum ViewerControllerError {
    InvalidDisplaySize { display_size: i32 },
    Coords(MapPixelToPlaneError),
    Range(ViewRangeError),
    Render(RenderFrameError),
}

impl fmt::Display for ViewerControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDisplaySize { display_size } => {
                write!(f, "display size must be positive: {}", display_size)
            }
            Self::Coords(err) => write!(f, "coordinate mapping error: {}", err),
            Self::Range(err) => write!(f, "view range error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for ViewerControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDisplaySize { .. } => None,
            Self::Coords(err) => Some(err),
            Self::Range(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<MapPixelToPlaneError> for ViewerControllerError {
    fn from(err: MapPixelToPlaneError) -> Self {
        Self::Coords(err)
    }
}

impl From<ViewRangeError> for ViewerControllerError {
    fn from(err: ViewRangeError) -> Self {
        Self::Range(err)
    }
}

impl From<RenderFrameError> for ViewerControllerError {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}

/// Owns the session's viewing rectangle and dispatches the viewer's two
/// commands: reset and click-to-zoom. Completed frames go to the sink, one
/// `present` per render.
pub struct ViewerController<G, M>
where
    G: FractalGenerator + Sync,
    M: ColourMap<Option<u32>> + Sync,
{
    range: ViewRange,
    display_size: i32,
    generator: G,
    colour_map: M,
    sink: Arc<dyn FrameSinkPort>,
}

impl<G, M> ViewerController<G, M>
where
    G: FractalGenerator + Sync,
    M: ColourMap<Option<u32>> + Sync,
{
    pub fn new(
        display_size: i32,
        generator: G,
        colour_map: M,
        sink: Arc<dyn FrameSinkPort>,
    ) -> Result<Self, ViewerControllerError> {
        if display_size <= 0 {
            return Err(ViewerControllerError::InvalidDisplaySize { display_size });
        }

        let range = generator.default_range();

        Ok(Self {
            range,
            display_size,
            generator,
            colour_map,
            sink,
        })
    }

    /// Recomputes the full frame for the current range and presents it.
    pub fn render(&self) -> Result<(), ViewerControllerError> {
        let frame = render_frame_rayon(
            self.range,
            self.display_size,
            &self.generator,
            &self.colour_map,
        )?;

        self.sink.present(frame);

        Ok(())
    }

    /// Restores the generator's default rectangle, then renders.
    pub fn reset_and_render(&mut self) -> Result<(), ViewerControllerError> {
        self.range = self.generator.default_range();
        self.render()
    }

    /// Zooms in on the plane point under the clicked pixel, then renders.
    pub fn recenter_zoom_and_render(&mut self, pixel: Point) -> Result<(), ViewerControllerError> {
        let x_plane = map_pixel_to_plane(
            self.range.x(),
            self.range.x() + self.range.width(),
            self.display_size,
            pixel.x,
        )?;
        let y_plane = map_pixel_to_plane(
            self.range.y(),
            self.range.y() + self.range.height(),
            self.display_size,
            pixel.y,
        )?;

        self.range.recenter_and_zoom(x_plane, y_plane, ZOOM_SCALE)?;

        self.render()
    }

    #[must_use]
    pub fn range(&self) -> ViewRange {
        self.range
    }

    #[must_use]
    pub fn display_size(&self) -> i32 {
        self.display_size
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.generator.display_name()
    }
}
