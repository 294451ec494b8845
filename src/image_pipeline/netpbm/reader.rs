use std::path::Path;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{Result, VisionError};

pub trait ImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<PixelBuffer>;

    fn read_file(&self, path: &Path) -> Result<PixelBuffer> {
        let data = std::fs::read(path)
            .map_err(|e| VisionError::InputReadError(format!("{}: {}", path.display(), e)))?;
        self.decode(&data)
    }
}
