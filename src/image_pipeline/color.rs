//! Color space module
//!
//! RGB/HSV/gray conversions, HSV range segmentation and per-pixel
//! intensity operations.

mod gray;
mod hsv;
mod point;

#[cfg(test)]
mod tests;

pub use gray::rgb_to_gray;
pub use hsv::{hsv_bytes_to_degrees, hsv_segmentation, rgb_pixel_to_hsv, rgb_to_hsv, HsvRange};
pub use point::{gray_negative, gray_to_pseudo_color, rgb_channel_to_gray, rgb_negative, RgbChannel};
