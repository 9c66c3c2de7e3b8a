use crate::controllers::viewer::ports::frame_sink::FrameSinkPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::Mutex;

/// Frame hand-off between the controller and the pixels presenter.
///
/// Holds at most one frame; a newer frame replaces an unconsumed older one.
#[derive(Default)]
pub struct PixelsFrameSink {
    frame: Mutex<Option<PixelBuffer>>,
}

impl PixelsFrameSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn take_frame(&self) -> Option<PixelBuffer> {
        self.frame.lock().unwrap().take()
    }
}

impl FrameSinkPort for PixelsFrameSink {
    fn present(&self, frame: PixelBuffer) {
        *self.frame.lock().unwrap() = Some(frame);
    }
}
