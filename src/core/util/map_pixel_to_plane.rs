use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MapPixelToPlaneError {
    InvalidDisplaySize {
        display_size: i32,
    },
    PixelOutsideDisplay {
        pixel_index: i32,
        display_size: i32,
    },
    EmptyRange {
        range_min: f64,
        range_max: f64,
    },
}

impl fmt::Display for MapPixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDisplaySize { display_size } => {
                write!(f, "display size must be positive: {}", display_size)
            }
            Self::PixelOutsideDisplay {
                pixel_index,
                display_size,
            } => {
                write!(
                    f,
                    "pixel index {} outside display of size {}",
                    pixel_index, display_size
                )
            }
            Self::EmptyRange {
                range_min,
                range_max,
            } => {
                write!(
                    f,
                    "range maximum {} must exceed range minimum {}",
                    range_max, range_min
                )
            }
        }
    }
}

impl Error for MapPixelToPlaneError {}

/// Maps a pixel index on one display axis to the plane coordinate it samples.
///
/// Linear interpolation over `[range_min, range_max)`: pixel 0 maps exactly to
/// `range_min`; the exclusive index `display_size` would map to `range_max`.
/// Each axis is mapped independently with the same display size, so the
/// aspect ratio follows the plane rectangle's own width/height ratio.
pub fn map_pixel_to_plane(
    range_min: f64,
    range_max: f64,
    display_size: i32,
    pixel_index: i32,
) -> Result<f64, MapPixelToPlaneError> {
    if display_size <= 0 {
        return Err(MapPixelToPlaneError::InvalidDisplaySize { display_size });
    }

    if pixel_index < 0 || pixel_index >= display_size {
        return Err(MapPixelToPlaneError::PixelOutsideDisplay {
            pixel_index,
            display_size,
        });
    }

    if range_max <= range_min {
        return Err(MapPixelToPlaneError::EmptyRange {
            range_min,
            range_max,
        });
    }

    Ok(range_min + (f64::from(pixel_index) / f64::from(display_size)) * (range_max - range_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_zero_maps_exactly_to_range_min() {
        let result = map_pixel_to_plane(-3.0, 1.0, 600, 0).unwrap();

        assert_eq!(result, -3.0);
    }

    #[test]
    fn test_midpoint_pixel_approximates_range_midpoint() {
        let result = map_pixel_to_plane(-2.0, 2.0, 600, 300).unwrap();

        assert!((result - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_last_pixel_stays_below_range_max() {
        let result = map_pixel_to_plane(0.0, 1.0, 100, 99).unwrap();

        assert_eq!(result, 0.99);
        assert!(result < 1.0);
    }

    #[test]
    fn test_mapping_is_linear() {
        let quarter = map_pixel_to_plane(0.0, 8.0, 400, 100).unwrap();
        let half = map_pixel_to_plane(0.0, 8.0, 400, 200).unwrap();

        assert_eq!(quarter, 2.0);
        assert_eq!(half, 4.0);
    }

    #[test]
    fn test_non_positive_display_size_fails() {
        assert_eq!(
            map_pixel_to_plane(0.0, 1.0, 0, 0),
            Err(MapPixelToPlaneError::InvalidDisplaySize { display_size: 0 })
        );
        assert_eq!(
            map_pixel_to_plane(0.0, 1.0, -600, 0),
            Err(MapPixelToPlaneError::InvalidDisplaySize { display_size: -600 })
        );
    }

    #[test]
    fn test_pixel_outside_display_fails() {
        assert_eq!(
            map_pixel_to_plane(0.0, 1.0, 600, 600),
            Err(MapPixelToPlaneError::PixelOutsideDisplay {
                pixel_index: 600,
                display_size: 600
            })
        );
        assert_eq!(
            map_pixel_to_plane(0.0, 1.0, 600, -1),
            Err(MapPixelToPlaneError::PixelOutsideDisplay {
                pixel_index: -1,
                display_size: 600
            })
        );
    }

    #[test]
    fn test_empty_range_fails() {
        assert_eq!(
            map_pixel_to_plane(1.0, 1.0, 600, 0),
            Err(MapPixelToPlaneError::EmptyRange {
                range_min: 1.0,
                range_max: 1.0
            })
        );
        assert_eq!(
            map_pixel_to_plane(2.0, -2.0, 600, 0),
            Err(MapPixelToPlaneError::EmptyRange {
                range_min: 2.0,
                range_max: -2.0
            })
        );
    }
}
