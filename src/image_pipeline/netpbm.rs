//! Netpbm codec module
//!
//! Binary PBM (`P4`), PGM (`P5`) and PPM (`P6`) reading and writing behind
//! the `ImageDecoder` / `ImageEncoder` traits.

mod netpbm_reader;
mod netpbm_writer;
pub mod reader;
mod tokenizer;
pub mod types;
pub mod writer;


use std::path::Path;

pub use netpbm_reader::NetpbmReader;
pub use netpbm_writer::NetpbmWriter;
pub use reader::ImageDecoder;
pub use types::NetpbmFormat;
pub use writer::ImageEncoder;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;

/// Reads a `P4`, `P5` or `P6` file.
pub fn read_image(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    NetpbmReader.read_file(path.as_ref())
}

/// Writes `image` as `P4` (levels 1), `P5` or `P6`.
pub fn write_image(path: impl AsRef<Path>, image: &PixelBuffer) -> Result<()> {
    NetpbmWriter.write_file(image, path.as_ref())
}
