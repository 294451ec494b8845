//! Drawing and measurement helpers built on blob metrics.

use std::f32::consts::PI;

use crate::image_pipeline::blob::types::Blob;
use crate::image_pipeline::buffer::{Channels, PixelBuffer, BACKGROUND, FOREGROUND};
use crate::image_pipeline::common::error::Result;

fn paint(image: &mut PixelBuffer, x: usize, y: usize, color: [u8; 3]) {
    if x < image.width() && y < image.height() {
        image.pixel_mut(x, y).copy_from_slice(&color);
    }
}

/// Outlines each blob's bounding box, clipped to the image.
pub fn draw_bounding_boxes(image: &mut PixelBuffer, blobs: &[Blob], color: [u8; 3]) -> Result<()> {
    image.ensure_channels(Channels::Rgb, "draw_bounding_boxes")?;

    for blob in blobs.iter().filter(|b| b.area > 0) {
        let (x0, y0) = (blob.bbox.x, blob.bbox.y);
        let (x1, y1) = (blob.bbox.x_end() - 1, blob.bbox.y_end() - 1);
        for x in x0..=x1 {
            paint(image, x, y0, color);
            paint(image, x, y1, color);
        }
        for y in y0..=y1 {
            paint(image, x0, y, color);
            paint(image, x1, y, color);
        }
    }
    Ok(())
}

/// Fills a `(2·radius + 1)` square around each blob centroid.
pub fn draw_centroids(image: &mut PixelBuffer, blobs: &[Blob], color: [u8; 3], radius: usize) -> Result<()> {
    image.ensure_channels(Channels::Rgb, "draw_centroids")?;

    for blob in blobs.iter().filter(|b| b.area > 0) {
        let (xc, yc) = blob.centroid;
        for y in yc.saturating_sub(radius)..=yc + radius {
            for x in xc.saturating_sub(radius)..=xc + radius {
                paint(image, x, y, color);
            }
        }
    }
    Ok(())
}

/// Copies `src` into `dst` and blanks the blob's bounding box.
pub fn clear_blob_region(src: &PixelBuffer, dst: &mut PixelBuffer, blob: &Blob) -> Result<()> {
    dst.copy_from(src)?;

    let x_end = blob.bbox.x_end().min(dst.width());
    let y_end = blob.bbox.y_end().min(dst.height());
    for y in blob.bbox.y..y_end {
        for x in blob.bbox.x..x_end {
            dst.pixel_mut(x, y).fill(BACKGROUND);
        }
    }
    Ok(())
}

/// Number of pixels whose first channel is foreground.
pub fn count_foreground(image: &PixelBuffer) -> usize {
    (0..image.height())
        .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| image.get(x, y, 0) == FOREGROUND)
        .count()
}

/// `4π·area / perimeter²` of all nonzero pixels in a one-channel image;
/// 0 when there is no contour.
pub fn roundness(binary: &PixelBuffer) -> Result<f32> {
    binary.ensure_channels(Channels::Gray, "roundness")?;

    let mut area = 0usize;
    let mut perimeter = 0usize;
    for y in 0..binary.height() {
        for x in 0..binary.width() {
            if binary.get(x, y, 0) == BACKGROUND {
                continue;
            }
            area += 1;
            let touches_background = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .iter()
                .any(|&(dx, dy)| binary.neighbor(x, y, dx, dy, 0) == Some(BACKGROUND));
            if touches_background {
                perimeter += 1;
            }
        }
    }

    if perimeter == 0 {
        return Ok(0.0);
    }
    Ok(4.0 * PI * area as f32 / (perimeter * perimeter) as f32)
}
