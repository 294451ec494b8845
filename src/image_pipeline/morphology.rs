//! Binary morphology module

mod binary;

#[cfg(test)]
mod tests;

pub use binary::{
    binary_close, binary_close_iterated, binary_dilate, binary_erode, binary_erode_iterated,
    binary_open,
};
