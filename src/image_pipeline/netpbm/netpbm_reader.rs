use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::netpbm::reader::ImageDecoder;
use crate::image_pipeline::netpbm::tokenizer::HeaderTokenizer;
use crate::image_pipeline::netpbm::types::{packed_row_len, NetpbmFormat};

/// Decoder for binary `P4`, `P5` and `P6` files.
///
/// Bitmaps decode to a one-channel buffer with levels 1 where a clear bit
/// is object (1) and a set bit is background (0).
pub struct NetpbmReader;

impl NetpbmReader {
    fn decode_bitmap(pixels: &[u8], width: usize, height: usize) -> Result<PixelBuffer> {
        let row_len = packed_row_len(width);
        let expected = row_len
            .checked_mul(height)
            .ok_or(VisionError::InvalidDimensions(width, height))?;
        if pixels.len() < expected {
            return Err(VisionError::TruncatedData {
                expected,
                actual: pixels.len(),
            });
        }

        let mut image = PixelBuffer::new(width, height, NetpbmFormat::Bitmap.channels(), 1)?;
        for (y, packed) in pixels.chunks_exact(row_len).take(height).enumerate() {
            for x in 0..width {
                let bit = packed[x / 8] & (0x80 >> (x % 8));
                image.set(x, y, 0, if bit != 0 { 0 } else { 1 });
            }
        }
        Ok(image)
    }

    fn decode_bytes(
        pixels: &[u8],
        format: NetpbmFormat,
        width: usize,
        height: usize,
        levels: u8,
    ) -> Result<PixelBuffer> {
        let expected = width
            .checked_mul(format.channels().count())
            .and_then(|stride| stride.checked_mul(height))
            .ok_or(VisionError::InvalidDimensions(width, height))?;
        if pixels.len() < expected {
            return Err(VisionError::TruncatedData {
                expected,
                actual: pixels.len(),
            });
        }
        PixelBuffer::from_raw(
            width,
            height,
            format.channels(),
            levels,
            pixels[..expected].to_vec(),
        )
    }
}

impl ImageDecoder for NetpbmReader {
    fn decode(&self, data: &[u8]) -> Result<PixelBuffer> {
        let mut header = HeaderTokenizer::new(data);
        let format = NetpbmFormat::from_magic(header.next_token("magic number")?)?;
        let width = header.next_number("width")?;
        let height = header.next_number("height")?;
        if width == 0 || height == 0 {
            return Err(VisionError::InvalidDimensions(width, height));
        }

        let image = match format {
            NetpbmFormat::Bitmap => {
                Self::decode_bitmap(&data[header.position()..], width, height)?
            }
            NetpbmFormat::Graymap | NetpbmFormat::Pixmap => {
                let levels = header.next_number("maximum value")?;
                if levels == 0 || levels > 255 {
                    return Err(VisionError::InvalidLevels(u32::try_from(levels).unwrap_or(u32::MAX)));
                }
                Self::decode_bytes(&data[header.position()..], format, width, height, levels as u8)?
            }
        };

        debug!(
            "Decoded {} image: {}x{} levels={}",
            format.magic(),
            width,
            height,
            image.levels()
        );
        Ok(image)
    }
}
