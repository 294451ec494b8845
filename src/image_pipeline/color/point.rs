//! Per-pixel intensity and channel operations.

use crate::image_pipeline::buffer::{Channels, PixelBuffer};
use crate::image_pipeline::common::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    fn index(self) -> usize {
        match self {
            RgbChannel::Red => 0,
            RgbChannel::Green => 1,
            RgbChannel::Blue => 2,
        }
    }
}

/// Inverts a one-channel buffer in place.
pub fn gray_negative(srcdst: &mut PixelBuffer) -> Result<()> {
    srcdst.ensure_channels(Channels::Gray, "gray_negative")?;
    srcdst.as_bytes_mut().iter_mut().for_each(|v| *v = 255 - *v);
    Ok(())
}

/// Inverts every channel of a three-channel buffer in place.
pub fn rgb_negative(srcdst: &mut PixelBuffer) -> Result<()> {
    srcdst.ensure_channels(Channels::Rgb, "rgb_negative")?;
    srcdst.as_bytes_mut().iter_mut().for_each(|v| *v = 255 - *v);
    Ok(())
}

/// Copies `channel` into the other two channels, giving a gray-looking RGB
/// image of that channel alone.
pub fn rgb_channel_to_gray(srcdst: &mut PixelBuffer, channel: RgbChannel) -> Result<()> {
    srcdst.ensure_channels(Channels::Rgb, "rgb_channel_to_gray")?;
    let keep = channel.index();
    for y in 0..srcdst.height() {
        for x in 0..srcdst.width() {
            let p = srcdst.pixel_mut(x, y);
            let v = p[keep];
            p.fill(v);
        }
    }
    Ok(())
}

/// Maps gray intensity onto a blue → cyan → green → yellow → red ramp.
pub fn gray_to_pseudo_color(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
    src.ensure_channels(Channels::Gray, "gray_to_pseudo_color source")?;
    dst.ensure_channels(Channels::Rgb, "gray_to_pseudo_color destination")?;
    src.ensure_same_size(dst)?;

    let lut = pseudo_color_table();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let v = src.get(x, y, 0) as usize;
            dst.pixel_mut(x, y).copy_from_slice(&lut[v]);
        }
    }
    Ok(())
}

fn pseudo_color_table() -> [[u8; 3]; 256] {
    let mut lut = [[0u8; 3]; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let step = (i % 64 * 4) as u8;
        *entry = match i / 64 {
            0 => [0, step, 255],
            1 => [0, 255, 255 - step],
            2 => [step, 255, 0],
            _ => [255, 255 - step, 0],
        };
    }
    lut
}
