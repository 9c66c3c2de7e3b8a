use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps a per-pixel value to a colour.
///
/// The error is boxed `Send + Sync` so a failing map can cross the parallel
/// render loop's join.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error + Send + Sync>>;

    fn display_name(&self) -> &str;
}
