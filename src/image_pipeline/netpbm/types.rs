use crate::image_pipeline::buffer::Channels;
use crate::image_pipeline::common::error::{Result, VisionError};

/// Binary Netpbm variants understood by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetpbmFormat {
    /// `P4`: one bit per pixel, rows padded to a byte
    Bitmap,
    /// `P5`: one byte per pixel
    Graymap,
    /// `P6`: three bytes per pixel
    Pixmap,
}

impl NetpbmFormat {
    pub fn from_magic(magic: &str) -> Result<Self> {
        match magic {
            "P4" => Ok(NetpbmFormat::Bitmap),
            "P5" => Ok(NetpbmFormat::Graymap),
            "P6" => Ok(NetpbmFormat::Pixmap),
            other => Err(VisionError::UnsupportedMagic(other.to_string())),
        }
    }

    pub fn magic(self) -> &'static str {
        match self {
            NetpbmFormat::Bitmap => "P4",
            NetpbmFormat::Graymap => "P5",
            NetpbmFormat::Pixmap => "P6",
        }
    }

    pub fn channels(self) -> Channels {
        match self {
            NetpbmFormat::Bitmap | NetpbmFormat::Graymap => Channels::Gray,
            NetpbmFormat::Pixmap => Channels::Rgb,
        }
    }

    /// Format a buffer is written as: levels 1 selects the bitmap.
    pub fn for_image(channels: Channels, levels: u8) -> Result<Self> {
        match (channels, levels) {
            (Channels::Gray, 1) => Ok(NetpbmFormat::Bitmap),
            (Channels::Rgb, 1) => Err(VisionError::InvalidChannelConfiguration {
                expected: "1 channel for a levels=1 bitmap".to_string(),
                actual: 3,
            }),
            (Channels::Gray, _) => Ok(NetpbmFormat::Graymap),
            (Channels::Rgb, _) => Ok(NetpbmFormat::Pixmap),
        }
    }
}

/// Bytes per packed bitmap row.
pub(crate) fn packed_row_len(width: usize) -> usize {
    width.div_ceil(8)
}
