use crate::core::data::pixel_buffer::PixelBuffer;

/// Display-surface port: receives one completed frame per render.
///
/// The whole grid arrives in a single call after the render loop finishes:
/// a batch update, never per-pixel pushes.
pub trait FrameSinkPort: Send + Sync {
    fn present(&self, frame: PixelBuffer);
}
