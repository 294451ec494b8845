use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{Result, VisionError};

pub trait ImageEncoder {
    fn encode(&self, image: &PixelBuffer, output: &mut dyn Write) -> Result<()>;

    fn write_file(&self, image: &PixelBuffer, path: &Path) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| VisionError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
        let mut output = BufWriter::new(file);
        self.encode(image, &mut output)?;
        output
            .flush()
            .map_err(|e| VisionError::OutputWriteError(format!("{}: {}", path.display(), e)))
    }
}
