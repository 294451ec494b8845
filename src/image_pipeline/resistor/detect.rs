use std::cmp::Ordering;

use tracing::debug;

use crate::image_pipeline::buffer::{Channels, PixelBuffer, FOREGROUND};
use crate::image_pipeline::color::hsv_segmentation;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::resistor::bands::{BandColor, BandTable};

/// A band color seen in a crop, with the column of its first pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundColor {
    pub x: usize,
    pub color: BandColor,
}

impl Ord for FoundColor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then_with(|| self.color.name().cmp(other.color.name()))
    }
}

impl PartialOrd for FoundColor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn first_foreground_column(segmented: &PixelBuffer) -> Option<usize> {
    (0..segmented.height()).find_map(|y| {
        (0..segmented.width()).find(|&x| segmented.get(x, y, 0) == FOREGROUND)
    })
}

/// Finds which band colors occur in an HSV crop.
///
/// Each table entry segments the crop with its window; the first matching
/// pixel in raster order contributes one `FoundColor`. The result is sorted
/// left to right, ties broken by color name.
pub fn detect_band_colors(hsv: &PixelBuffer, table: &BandTable) -> Result<Vec<FoundColor>> {
    hsv.ensure_channels(Channels::Rgb, "detect_band_colors")?;

    let mut segmented = PixelBuffer::new(hsv.width(), hsv.height(), Channels::Rgb, hsv.levels())?;
    let mut found = Vec::new();

    for band in table.bands() {
        hsv_segmentation(hsv, &mut segmented, &band.range)?;
        if let Some(x) = first_foreground_column(&segmented) {
            found.push(FoundColor { x, color: band.color });
        }
    }

    found.sort();
    debug!(
        "Detected {} bands in {}x{} crop",
        found.len(),
        hsv.width(),
        hsv.height()
    );
    Ok(found)
}
