//! Gray to binary thresholding.

use tracing::debug;

use crate::image_pipeline::buffer::{Channels, PixelBuffer, BACKGROUND, FOREGROUND};
use crate::image_pipeline::common::error::{Result, VisionError};

pub(crate) fn ensure_gray_pair(src: &PixelBuffer, dst: &PixelBuffer, op: &str) -> Result<()> {
    src.ensure_channels(Channels::Gray, op)?;
    dst.ensure_channels(Channels::Gray, op)?;
    src.ensure_same_size(dst)
}

/// Local midpoint threshold: each pixel is compared with the average of the
/// minimum and maximum intensity in its `kernel × kernel` neighbourhood,
/// clipped at the image edges.
pub fn gray_to_binary_midpoint(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "gray_to_binary_midpoint")?;
    if kernel == 0 {
        return Err(VisionError::InvalidParameter("kernel must be at least 1".to_string()));
    }

    let offset = ((kernel - 1) / 2) as isize;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let mut min = u8::MAX;
            let mut max = u8::MIN;
            for ky in -offset..=offset {
                for kx in -offset..=offset {
                    if let Some(v) = src.neighbor(x, y, kx, ky, 0) {
                        min = min.min(v);
                        max = max.max(v);
                    }
                }
            }

            let threshold = ((min as u16 + max as u16) / 2) as u8;
            let value = if src.get(x, y, 0) > threshold { FOREGROUND } else { BACKGROUND };
            dst.set(x, y, 0, value);
        }
    }

    debug!("Midpoint threshold with {}x{} kernel", kernel, kernel);
    Ok(())
}

/// Fixed threshold: pixels brighter than `threshold` become foreground.
pub fn gray_to_binary(src: &PixelBuffer, dst: &mut PixelBuffer, threshold: u8) -> Result<()> {
    ensure_gray_pair(src, dst, "gray_to_binary")?;

    for (out, &v) in dst.as_bytes_mut().iter_mut().zip(src.as_bytes()) {
        *out = if v > threshold { FOREGROUND } else { BACKGROUND };
    }
    Ok(())
}

/// Thresholds in place at the integer mean intensity. Returns the mean used.
pub fn gray_to_binary_global_mean(srcdst: &mut PixelBuffer) -> Result<u8> {
    srcdst.ensure_channels(Channels::Gray, "gray_to_binary_global_mean")?;

    let sum: u64 = srcdst.as_bytes().iter().map(|&v| v as u64).sum();
    let mean = (sum / srcdst.len() as u64) as u8;

    for v in srcdst.as_bytes_mut() {
        *v = if *v > mean { FOREGROUND } else { BACKGROUND };
    }

    debug!("Global mean threshold at {}", mean);
    Ok(mean)
}
