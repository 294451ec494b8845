use std::io::Write;

use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::netpbm::types::{packed_row_len, NetpbmFormat};
use crate::image_pipeline::netpbm::writer::ImageEncoder;

/// Encoder producing `P4` for levels-1 buffers and `P5`/`P6` otherwise.
///
/// Gray and color headers always declare 255 as the maximum value.
pub struct NetpbmWriter;

impl NetpbmWriter {
    fn pack_bitmap(image: &PixelBuffer) -> Vec<u8> {
        let row_len = packed_row_len(image.width());
        let mut packed = vec![0u8; row_len * image.height()];
        for (y, out) in packed.chunks_exact_mut(row_len).enumerate() {
            for x in 0..image.width() {
                if image.get(x, y, 0) == 0 {
                    out[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        packed
    }
}

impl ImageEncoder for NetpbmWriter {
    fn encode(&self, image: &PixelBuffer, output: &mut dyn Write) -> Result<()> {
        let format = NetpbmFormat::for_image(image.channels(), image.levels())?;
        let write_err = |e: std::io::Error| VisionError::OutputWriteError(e.to_string());

        match format {
            NetpbmFormat::Bitmap => {
                writeln!(output, "P4 {} {}", image.width(), image.height()).map_err(write_err)?;
                output.write_all(&Self::pack_bitmap(image)).map_err(write_err)?;
            }
            NetpbmFormat::Graymap | NetpbmFormat::Pixmap => {
                writeln!(
                    output,
                    "{} {} {} 255",
                    format.magic(),
                    image.width(),
                    image.height()
                )
                .map_err(write_err)?;
                output.write_all(image.as_bytes()).map_err(write_err)?;
            }
        }

        debug!(
            "Encoded {}x{} image as {}",
            image.width(),
            image.height(),
            format.magic()
        );
        Ok(())
    }
}
