use tracing::debug;

use crate::image_pipeline::buffer::{PixelBuffer, BACKGROUND, FOREGROUND};
use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::filters::histogram::histogram;
use crate::image_pipeline::filters::smoothing::neighborhood3;
use crate::image_pipeline::filters::threshold::ensure_gray_pair;

/// Prewitt edge magnitude followed by an adaptive binarization.
///
/// `th` is the fraction of pixels, in (0, 1], that must lie below the chosen
/// threshold. Border pixels have zero magnitude. Returns the threshold used.
pub fn edge_prewitt(src: &PixelBuffer, dst: &mut PixelBuffer, th: f32) -> Result<u16> {
    ensure_gray_pair(src, dst, "edge_prewitt")?;
    if !(th > 0.0 && th <= 1.0) {
        return Err(VisionError::InvalidParameter(format!(
            "Prewitt fraction {th} outside (0, 1]"
        )));
    }

    dst.fill(BACKGROUND);
    if src.width() >= 3 && src.height() >= 3 {
        for y in 1..src.height() - 1 {
            for x in 1..src.width() - 1 {
                // a b c
                // d x e
                // f g h
                let [a, b, c, d, _, e, f, g, h] = neighborhood3(src, x, y);
                let gx = (c + e + h - a - d - f) / 3;
                let gy = (f + g + h - a - b - c) / 3;
                let magnitude = ((gx * gx + gy * gy) as f64).sqrt();
                dst.set(x, y, 0, magnitude as u8);
            }
        }
    }

    let hist = histogram(dst)?;
    let target = dst.len() as f32 * th;
    let mut cumulative = 0u64;
    let mut threshold = 256u16;
    for (level, &count) in hist.iter().enumerate() {
        cumulative += count;
        if cumulative as f32 >= target {
            threshold = level as u16;
            break;
        }
    }

    for v in dst.as_bytes_mut() {
        *v = if *v as u16 >= threshold { FOREGROUND } else { BACKGROUND };
    }

    debug!("Prewitt threshold {} for fraction {}", threshold, th);
    Ok(threshold)
}
