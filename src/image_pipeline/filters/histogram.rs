use tracing::debug;

use crate::image_pipeline::buffer::{Channels, PixelBuffer};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::threshold::ensure_gray_pair;

/// 256-bin intensity histogram of a one-channel buffer.
pub fn histogram(src: &PixelBuffer) -> Result<[u64; 256]> {
    src.ensure_channels(Channels::Gray, "histogram")?;

    let mut hist = [0u64; 256];
    for &v in src.as_bytes() {
        hist[v as usize] += 1;
    }
    Ok(hist)
}

/// Remaps every pixel to `cdf[pixel] · levels`.
pub fn histogram_equalization(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    ensure_gray_pair(src, dst, "histogram_equalization")?;

    let hist = histogram(src)?;
    let total = src.len() as f32;
    let levels = src.levels() as f32;

    let mut cdf = [0f32; 256];
    let mut acc = 0f32;
    for (bin, &count) in cdf.iter_mut().zip(hist.iter()) {
        acc += count as f32 / total;
        *bin = acc;
    }

    for (out, &v) in dst.as_bytes_mut().iter_mut().zip(src.as_bytes()) {
        *out = (cdf[v as usize] * levels).clamp(0.0, 255.0) as u8;
    }

    debug!("Equalized {}x{} image", src.width(), src.height());
    Ok(())
}
