use std::collections::VecDeque;
use std::path::PathBuf;

use tracing::debug;

use crate::image_pipeline::buffer::{Channels, PixelBuffer};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::netpbm::{ImageDecoder, NetpbmReader};

/// Pull-based supplier of RGB frames.
pub trait FrameSource {
    /// Next frame, or `Ok(None)` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>>;
}

/// Frames read from a list of `P6` files, in order.
pub struct NetpbmSequence {
    paths: VecDeque<PathBuf>,
    reader: NetpbmReader,
}

impl NetpbmSequence {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            reader: NetpbmReader,
        }
    }

    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl FrameSource for NetpbmSequence {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>> {
        let Some(path) = self.paths.pop_front() else {
            return Ok(None);
        };
        let frame = self.reader.read_file(&path)?;
        frame.ensure_channels(Channels::Rgb, "video frame")?;
        debug!("Loaded frame {}", path.display());
        Ok(Some(frame))
    }
}

impl FrameSource for VecDeque<PixelBuffer> {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>> {
        Ok(self.pop_front())
    }
}
