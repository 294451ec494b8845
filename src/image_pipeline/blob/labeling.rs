//! Two-pass connected-component labeling.
//!
//! The forward raster pass looks at the four already-visited neighbours
//!
//! ```text
//! A B C
//! D X
//! ```
//!
//! and gives `X` either a fresh provisional label or the smallest resolved
//! label among its marked neighbours, recording every neighbour's class as
//! equivalent to that minimum. Equivalences live in a union-find whose roots
//! are always the smallest label of their class. Provisional labels are kept
//! in a 32-bit plane, so only the final blob count is bounded by the 8-bit
//! output.

use tracing::debug;

use crate::image_pipeline::blob::types::Blob;
use crate::image_pipeline::buffer::{PixelBuffer, BACKGROUND, FOREGROUND};
use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::filters::ensure_gray_pair;

/// Largest label an 8-bit labeled image can carry; 0 is background and 255
/// is unlabeled foreground.
pub const MAX_LABELS: usize = 254;

struct Equivalences {
    parent: Vec<u32>,
}

impl Equivalences {
    fn new() -> Self {
        // slot 0 is the background and never used as a label
        Self { parent: vec![0] }
    }

    fn fresh(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    /// Points the class of `label` at `root`, which must be the smaller root.
    fn merge_into(&mut self, label: u32, root: u32) {
        let other = self.find(label);
        if other != root {
            self.parent[other as usize] = root;
        }
    }

    fn provisional_count(&self) -> usize {
        self.parent.len() - 1
    }
}

struct LabelPlane {
    width: usize,
    labels: Vec<u32>,
}

impl LabelPlane {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            labels: vec![0; width * height],
        }
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u32 {
        self.labels[y * self.width + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, label: u32) {
        self.labels[y * self.width + x] = label;
    }
}

/// Labels the foreground regions of `src` into `dst`.
///
/// Any nonzero source pixel is foreground. The outermost rows and columns
/// are cleared first, so blobs never touch the frame edge. On success `dst`
/// holds labels `1..=N` in order of each blob's first raster pixel and the
/// returned vector has one `Blob` per label with only `label` filled in.
/// An image without foreground yields an empty vector.
pub fn label_blobs(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<Vec<Blob>> {
    ensure_gray_pair(src, dst, "label_blobs")?;

    let (w, h) = (src.width(), src.height());
    for (out, &v) in dst.as_bytes_mut().iter_mut().zip(src.as_bytes()) {
        *out = if v != BACKGROUND { FOREGROUND } else { BACKGROUND };
    }
    for y in 0..h {
        dst.set(0, y, 0, BACKGROUND);
        dst.set(w - 1, y, 0, BACKGROUND);
    }
    for x in 0..w {
        dst.set(x, 0, 0, BACKGROUND);
        dst.set(x, h - 1, 0, BACKGROUND);
    }
    if w < 3 || h < 3 {
        return Ok(Vec::new());
    }

    let mut plane = LabelPlane::new(w, h);
    let mut table = Equivalences::new();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if dst.get(x, y, 0) == BACKGROUND {
                continue;
            }

            let neighbors = [
                plane.get(x - 1, y - 1),
                plane.get(x, y - 1),
                plane.get(x + 1, y - 1),
                plane.get(x - 1, y),
            ];

            let mut num = u32::MAX;
            for &n in neighbors.iter().filter(|&&n| n != 0) {
                num = num.min(table.find(n));
            }

            if num == u32::MAX {
                plane.set(x, y, table.fresh());
                continue;
            }

            for &n in neighbors.iter().filter(|&&n| n != 0) {
                table.merge_into(n, num);
            }
            plane.set(x, y, num);
        }
    }

    // Roots are the smallest label of their class, so scanning labels in
    // ascending order numbers blobs by their first raster pixel.
    let provisional = table.provisional_count();
    let mut compact = vec![0u32; provisional + 1];
    let mut count = 0usize;
    for label in 1..=provisional as u32 {
        if table.find(label) == label {
            count += 1;
            compact[label as usize] = count as u32;
        }
    }

    debug!(
        "Labeling: {} provisional labels resolved to {} blobs",
        provisional, count
    );

    if count > MAX_LABELS {
        dst.fill(BACKGROUND);
        return Err(VisionError::LabelOverflow(count));
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let label = plane.get(x, y);
            if label != 0 {
                let root = table.find(label);
                dst.set(x, y, 0, compact[root as usize] as u8);
            }
        }
    }

    Ok((1..=count).map(|label| Blob::new(label as u8)).collect())
}
