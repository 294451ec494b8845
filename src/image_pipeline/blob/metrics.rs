use tracing::debug;

use crate::image_pipeline::blob::types::{Blob, BoundingBox};
use crate::image_pipeline::buffer::{Channels, PixelBuffer};
use crate::image_pipeline::common::error::Result;

#[derive(Clone, Copy)]
struct Accumulator {
    area: usize,
    perimeter: usize,
    sum_x: usize,
    sum_y: usize,
    x_min: usize,
    y_min: usize,
    x_max: usize,
    y_max: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            area: 0,
            perimeter: 0,
            sum_x: 0,
            sum_y: 0,
            x_min: usize::MAX,
            y_min: usize::MAX,
            x_max: 0,
            y_max: 0,
        }
    }
}

/// Fills area, perimeter, bounding box and centroid of every blob from a
/// labeled image, in a single pass over the interior pixels.
pub fn blob_metrics(labeled: &PixelBuffer, blobs: &mut [Blob]) -> Result<()> {
    labeled.ensure_channels(Channels::Gray, "blob_metrics")?;

    let mut slot_of_label: [Option<usize>; 256] = [None; 256];
    for (slot, blob) in blobs.iter().enumerate() {
        slot_of_label[blob.label as usize] = Some(slot);
    }
    let mut acc = vec![Accumulator::default(); blobs.len()];

    let (w, h) = (labeled.width(), labeled.height());
    if w >= 3 && h >= 3 {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let label = labeled.get(x, y, 0);
                if label == 0 {
                    continue;
                }
                let Some(slot) = slot_of_label[label as usize] else {
                    continue;
                };

                let a = &mut acc[slot];
                a.area += 1;
                a.sum_x += x;
                a.sum_y += y;
                a.x_min = a.x_min.min(x);
                a.y_min = a.y_min.min(y);
                a.x_max = a.x_max.max(x);
                a.y_max = a.y_max.max(y);

                let on_contour = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                    .iter()
                    .any(|&(dx, dy)| labeled.neighbor(x, y, dx, dy, 0) != Some(label));
                if on_contour {
                    a.perimeter += 1;
                }
            }
        }
    }

    for (blob, a) in blobs.iter_mut().zip(acc) {
        blob.area = a.area;
        blob.perimeter = a.perimeter;
        if a.area == 0 {
            blob.bbox = BoundingBox::default();
            blob.centroid = (0, 0);
            continue;
        }
        blob.bbox = BoundingBox {
            x: a.x_min,
            y: a.y_min,
            width: a.x_max - a.x_min + 1,
            height: a.y_max - a.y_min + 1,
        };
        blob.centroid = (a.sum_x / a.area, a.sum_y / a.area);
    }

    debug!("Computed metrics for {} blobs", blobs.len());
    Ok(())
}
