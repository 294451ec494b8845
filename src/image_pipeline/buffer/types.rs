//! Channel layout of a pixel buffer

use crate::image_pipeline::common::error::{Result, VisionError};

/// Number of interleaved 8-bit samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Single channel (binary, label or grayscale data)
    Gray,
    /// Three interleaved channels, RGB or HSV depending on the producer
    Rgb,
}

impl Channels {
    pub const fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }

    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            other => Err(VisionError::InvalidChannelConfiguration {
                expected: "1 or 3".to_string(),
                actual: other,
            }),
        }
    }
}

/// Intensity written for object pixels in binary buffers.
pub const FOREGROUND: u8 = 255;
/// Intensity written for background pixels in binary buffers.
pub const BACKGROUND: u8 = 0;
