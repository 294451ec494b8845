//! Pixel buffer module
//!
//! This module provides the owned image container every other stage reads
//! from and writes into.

mod pixel_buffer;
pub mod types;

#[cfg(test)]
mod tests;

pub use pixel_buffer::PixelBuffer;
pub use types::{Channels, BACKGROUND, FOREGROUND};
