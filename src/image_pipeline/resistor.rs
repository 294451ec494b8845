//! Resistor decoding module
//!
//! Band color detection on HSV crops and conversion of the detected band
//! sequence to a resistance value.

pub mod bands;
mod decode;
mod detect;

#[cfg(test)]
mod tests;

pub use bands::{BandColor, BandTable, ColorBand};
pub use decode::{decode_resistance, describe_resistance, Resistance, INVALID_RESISTANCE, TOLERANCE_PERCENT};
pub use detect::{detect_band_colors, FoundColor};
