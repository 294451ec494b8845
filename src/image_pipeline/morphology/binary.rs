//! Binary erosion, dilation and their compositions.
//!
//! A pixel is background when it is 0 and foreground when it is 255.
//! `kernel` is the side of a square structuring element; the neighbourhood
//! radius is `kernel / 2`, so even kernels behave like the next odd size.

use tracing::debug;

use crate::image_pipeline::buffer::{PixelBuffer, BACKGROUND, FOREGROUND};
use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::filters::ensure_gray_pair;

fn radius(kernel: usize) -> Result<usize> {
    if kernel == 0 {
        return Err(VisionError::InvalidParameter("kernel must be at least 1".to_string()));
    }
    Ok(kernel / 2)
}

fn any_neighbor(src: &PixelBuffer, x: usize, y: usize, offset: usize, value: u8) -> bool {
    let r = offset as isize;
    (-r..=r).any(|dy| (-r..=r).any(|dx| src.neighbor(x, y, dx, dy, 0) == Some(value)))
}

/// Erosion over the interior `[offset, dim - offset)`; the outer band of
/// `dst` is left as it was.
pub fn binary_erode(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "binary_erode")?;
    let offset = radius(kernel)?;

    let (w, h) = (src.width(), src.height());
    if w <= 2 * offset || h <= 2 * offset {
        return Ok(());
    }

    for y in offset..h - offset {
        for x in offset..w - offset {
            let value = if any_neighbor(src, x, y, offset, BACKGROUND) {
                BACKGROUND
            } else {
                FOREGROUND
            };
            dst.set(x, y, 0, value);
        }
    }

    debug!("Eroded {}x{} image with kernel {}", w, h, kernel);
    Ok(())
}

/// Dilation over the whole image; neighbours outside the image are skipped.
pub fn binary_dilate(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "binary_dilate")?;
    let offset = radius(kernel)?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let value = if any_neighbor(src, x, y, offset, FOREGROUND) {
                FOREGROUND
            } else {
                BACKGROUND
            };
            dst.set(x, y, 0, value);
        }
    }

    debug!("Dilated {}x{} image with kernel {}", src.width(), src.height(), kernel);
    Ok(())
}

fn scratch_like(src: &PixelBuffer) -> Result<PixelBuffer> {
    PixelBuffer::new(src.width(), src.height(), src.channels(), src.levels())
}

/// Erosion followed by dilation.
pub fn binary_open(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "binary_open")?;
    let mut eroded = scratch_like(src)?;
    binary_erode(src, &mut eroded, kernel)?;
    binary_dilate(&eroded, dst, kernel)
}

/// Dilation followed by erosion.
pub fn binary_close(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "binary_close")?;
    let mut dilated = scratch_like(src)?;
    binary_dilate(src, &mut dilated, kernel)?;
    binary_erode(&dilated, dst, kernel)
}

/// Erosion over the whole image where neighbours outside the image are
/// skipped, so the frame edge never counts as background.
fn binary_erode_clamped(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: usize) -> Result<()> {
    let offset = radius(kernel)?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let value = if any_neighbor(src, x, y, offset, BACKGROUND) {
                BACKGROUND
            } else {
                FOREGROUND
            };
            dst.set(x, y, 0, value);
        }
    }
    Ok(())
}

/// Applies a 3×3 operation `iterations` times, each step into a fresh buffer.
fn repeat3x3(
    src: &PixelBuffer,
    iterations: usize,
    op: fn(&PixelBuffer, &mut PixelBuffer, usize) -> Result<()>,
) -> Result<PixelBuffer> {
    let mut current = src.clone();
    for _ in 0..iterations {
        let mut next = scratch_like(src)?;
        op(&current, &mut next, 3)?;
        current = next;
    }
    Ok(current)
}

/// `iterations` 3×3 dilations followed by as many 3×3 erosions. Both
/// passes cover the whole frame, so foreground touching the edge survives.
pub fn binary_close_iterated(src: &PixelBuffer, dst: &mut PixelBuffer, iterations: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "binary_close_iterated")?;
    let dilated = repeat3x3(src, iterations, binary_dilate)?;
    let closed = repeat3x3(&dilated, iterations, binary_erode_clamped)?;
    debug!("Closed {}x{} image with {} iterations", src.width(), src.height(), iterations);
    dst.copy_from(&closed)
}

/// `iterations` successive 3×3 erosions over the whole frame.
pub fn binary_erode_iterated(src: &PixelBuffer, dst: &mut PixelBuffer, iterations: usize) -> Result<()> {
    ensure_gray_pair(src, dst, "binary_erode_iterated")?;
    let eroded = repeat3x3(src, iterations, binary_erode_clamped)?;
    debug!("Eroded {}x{} image {} times", src.width(), src.height(), iterations);
    dst.copy_from(&eroded)
}
