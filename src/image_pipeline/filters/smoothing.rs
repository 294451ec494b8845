//! Fixed 3×3 neighbourhood filters.
//!
//! Only interior pixels are written; the one-pixel border of the
//! destination keeps whatever it held before.

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::threshold::ensure_gray_pair;

/// Row-major 3×3 neighbourhood of an interior pixel.
#[inline]
pub(crate) fn neighborhood3(src: &PixelBuffer, x: usize, y: usize) -> [i32; 9] {
    let mut taps = [0i32; 9];
    for (i, tap) in taps.iter_mut().enumerate() {
        let (dx, dy) = (i % 3, i / 3);
        *tap = src.get(x + dx - 1, y + dy - 1, 0) as i32;
    }
    taps
}

fn apply3x3<F>(src: &PixelBuffer, dst: &mut PixelBuffer, op: &str, f: F) -> Result<()>
where
    F: Fn(&[i32; 9]) -> u8,
{
    ensure_gray_pair(src, dst, op)?;
    if src.width() < 3 || src.height() < 3 {
        return Ok(());
    }

    for y in 1..src.height() - 1 {
        for x in 1..src.width() - 1 {
            let taps = neighborhood3(src, x, y);
            dst.set(x, y, 0, f(&taps));
        }
    }
    Ok(())
}

/// Unweighted 3×3 average.
pub fn mean_filter_3x3(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    apply3x3(src, dst, "mean_filter_3x3", |taps| (taps.iter().sum::<i32>() / 9) as u8)
}

/// 3×3 median.
pub fn median_filter_3x3(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    apply3x3(src, dst, "median_filter_3x3", |taps| {
        let mut sorted = *taps;
        sorted.sort_unstable();
        sorted[4] as u8
    })
}

/// `(4·center − up − left − right − down) / 6`, clamped to a byte.
pub fn highpass_filter_3x3(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    apply3x3(src, dst, "highpass_filter_3x3", |taps| {
        let sum = 4 * taps[4] - taps[1] - taps[3] - taps[5] - taps[7];
        (sum / 6).clamp(0, 255) as u8
    })
}
