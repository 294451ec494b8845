use std::fmt;

use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::resistor::detect::FoundColor;

/// Tolerance reported for every decoded resistor.
pub const TOLERANCE_PERCENT: u32 = 5;

/// Text reported when a crop yields fewer than three bands.
pub const INVALID_RESISTANCE: &str = "Invalid resistance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resistance {
    pub ohms: u64,
    pub tolerance_percent: u32,
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ohm ±{}%", self.ohms, self.tolerance_percent)
    }
}

/// Reads the first three bands as two significant digits and a
/// power-of-ten multiplier. Bands past the third are ignored.
pub fn decode_resistance(bands: &[FoundColor]) -> Result<Resistance> {
    let [first, second, multiplier, ..] = bands else {
        return Err(VisionError::DecodeUnderflow(bands.len()));
    };

    let significant = u64::from(first.color.digit() * 10 + second.color.digit());
    Ok(Resistance {
        ohms: significant * 10u64.pow(multiplier.color.digit()),
        tolerance_percent: TOLERANCE_PERCENT,
    })
}

/// `decode_resistance` rendered as text, or `INVALID_RESISTANCE`.
pub fn describe_resistance(bands: &[FoundColor]) -> String {
    match decode_resistance(bands) {
        Ok(resistance) => resistance.to_string(),
        Err(_) => INVALID_RESISTANCE.to_string(),
    }
}
