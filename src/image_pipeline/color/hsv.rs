//! RGB to HSV conversion and HSV range segmentation.
//!
//! HSV buffers reuse the three-channel layout: channel 0 holds the hue
//! scaled from [0, 360) to a byte, channel 1 the saturation scaled to
//! [0, 255] and channel 2 the value (the largest RGB component).
//! Segmentation rescales the bytes back to degrees and percent with
//! truncation, so a convert-then-segment round trip is lossy.

use tracing::debug;

use crate::image_pipeline::buffer::{Channels, PixelBuffer, BACKGROUND, FOREGROUND};
use crate::image_pipeline::common::error::Result;

/// Inclusion range over hue (degrees), saturation and value (percent).
///
/// Hue uses a half-open interval `(h_min, h_max]`; saturation and value are
/// inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub h_min: i32,
    pub h_max: i32,
    pub s_min: i32,
    pub s_max: i32,
    pub v_min: i32,
    pub v_max: i32,
}

impl HsvRange {
    pub const fn new(h_min: i32, h_max: i32, s_min: i32, s_max: i32, v_min: i32, v_max: i32) -> Self {
        Self {
            h_min,
            h_max,
            s_min,
            s_max,
            v_min,
            v_max,
        }
    }

    /// Hue (degrees), saturation and value (percent) membership test.
    #[inline]
    pub fn contains(&self, h: i32, s: i32, v: i32) -> bool {
        h > self.h_min
            && h <= self.h_max
            && s >= self.s_min
            && s <= self.s_max
            && v >= self.v_min
            && v <= self.v_max
    }
}

/// Converts one RGB sample to the byte-packed (hue, saturation, value) form.
#[inline]
pub fn rgb_pixel_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let mut hue = 0.0f32;
    let mut sat = 0.0f32;

    if max > 0.0 {
        sat = (max - min) / max * 255.0;

        if sat > 0.0 {
            let delta = max - min;
            hue = if max == rf {
                if gf >= bf {
                    60.0 * (gf - bf) / delta
                } else {
                    360.0 + 60.0 * (gf - bf) / delta
                }
            } else if max == gf {
                120.0 + 60.0 * (bf - rf) / delta
            } else {
                240.0 + 60.0 * (rf - gf) / delta
            };
            hue = hue / 360.0 * 255.0;
        }
    }

    [hue as u8, sat as u8, max as u8]
}

/// Unpacks an HSV byte triple into hue degrees and saturation/value percent.
#[inline]
pub fn hsv_bytes_to_degrees(hsv: &[u8]) -> (i32, i32, i32) {
    let h = (hsv[0] as f32 / 255.0 * 360.0) as i32;
    let s = (hsv[1] as f32 / 255.0 * 100.0) as i32;
    let v = (hsv[2] as f32 / 255.0 * 100.0) as i32;
    (h, s, v)
}

/// Converts an RGB buffer into a byte-packed HSV buffer of the same size.
pub fn rgb_to_hsv(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    src.ensure_channels(Channels::Rgb, "rgb_to_hsv source")?;
    dst.ensure_channels(Channels::Rgb, "rgb_to_hsv destination")?;
    src.ensure_same_size(dst)?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let p = src.pixel(x, y);
            let hsv = rgb_pixel_to_hsv(p[0], p[1], p[2]);
            dst.pixel_mut(x, y).copy_from_slice(&hsv);
        }
    }

    debug!("Converted {}x{} image to HSV", src.width(), src.height());
    Ok(())
}

/// Marks every pixel whose HSV lies inside `range` as foreground (all three
/// channels 255) and every other pixel as background (all three 0).
pub fn hsv_segmentation(src: &PixelBuffer, dst: &mut PixelBuffer, range: &HsvRange) -> Result<()> {
    src.ensure_channels(Channels::Rgb, "hsv_segmentation source")?;
    dst.ensure_channels(Channels::Rgb, "hsv_segmentation destination")?;
    src.ensure_same_size(dst)?;

    let mut matched = 0usize;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (h, s, v) = hsv_bytes_to_degrees(src.pixel(x, y));
            let value = if range.contains(h, s, v) {
                matched += 1;
                FOREGROUND
            } else {
                BACKGROUND
            };
            dst.pixel_mut(x, y).fill(value);
        }
    }

    debug!("HSV segmentation {:?}: {} pixels matched", range, matched);
    Ok(())
}
