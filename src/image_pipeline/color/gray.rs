use tracing::debug;

use crate::image_pipeline::buffer::{Channels, PixelBuffer};
use crate::image_pipeline::common::error::Result;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Luma conversion of a three-channel buffer into a one-channel buffer,
/// rounded to the nearest byte.
pub fn rgb_to_gray(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    src.ensure_channels(Channels::Rgb, "rgb_to_gray source")?;
    dst.ensure_channels(Channels::Gray, "rgb_to_gray destination")?;
    src.ensure_same_size(dst)?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let p = src.pixel(x, y);
            let luma = LUMA_R * p[0] as f32 + LUMA_G * p[1] as f32 + LUMA_B * p[2] as f32;
            dst.set(x, y, 0, luma.round().clamp(0.0, 255.0) as u8);
        }
    }

    debug!("Converted {}x{} image to gray", src.width(), src.height());
    Ok(())
}
