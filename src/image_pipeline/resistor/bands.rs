//! Color bands painted on through-hole resistors.

use std::fmt;

use crate::image_pipeline::color::HsvRange;

/// Standard resistor color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
    White,
}

impl BandColor {
    pub const ALL: [BandColor; 10] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Purple,
        BandColor::Gray,
        BandColor::White,
    ];

    /// Digit the color stands for, black 0 through white 9.
    pub const fn digit(self) -> u32 {
        match self {
            BandColor::Black => 0,
            BandColor::Brown => 1,
            BandColor::Red => 2,
            BandColor::Orange => 3,
            BandColor::Yellow => 4,
            BandColor::Green => 5,
            BandColor::Blue => 6,
            BandColor::Purple => 7,
            BandColor::Gray => 8,
            BandColor::White => 9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BandColor::Black => "Black",
            BandColor::Brown => "Brown",
            BandColor::Red => "Red",
            BandColor::Orange => "Orange",
            BandColor::Yellow => "Yellow",
            BandColor::Green => "Green",
            BandColor::Blue => "Blue",
            BandColor::Purple => "Purple",
            BandColor::Gray => "Gray",
            BandColor::White => "White",
        }
    }

    /// Looks a color up by name; "Violet" is accepted for purple.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("violet") {
            return Some(BandColor::Purple);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// HSV window in which a band color is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    pub color: BandColor,
    pub range: HsvRange,
}

impl ColorBand {
    pub const fn new(color: BandColor, range: HsvRange) -> Self {
        Self { color, range }
    }
}

/// Ordered set of color windows tried on every resistor crop.
///
/// A color may appear more than once to cover lighting variations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandTable {
    bands: Vec<ColorBand>,
}

impl BandTable {
    pub fn new(bands: Vec<ColorBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Default for BandTable {
    /// Windows calibrated for the reference footage. Yellow, purple, gray
    /// and white have no window and are never detected.
    fn default() -> Self {
        Self::new(vec![
            ColorBand::new(BandColor::Red, HsvRange::new(0, 21, 63, 75, 70, 100)),
            ColorBand::new(BandColor::Red, HsvRange::new(353, 359, 54, 63, 71, 77)),
            ColorBand::new(BandColor::Red, HsvRange::new(353, 359, 59, 67, 70, 75)),
            ColorBand::new(BandColor::Green, HsvRange::new(102, 108, 29, 35, 37, 42)),
            ColorBand::new(BandColor::Blue, HsvRange::new(192, 200, 26, 33, 34, 40)),
            ColorBand::new(BandColor::Black, HsvRange::new(0, 80, 0, 100, 0, 30)),
            ColorBand::new(BandColor::Brown, HsvRange::new(7, 27, 26, 51, 31, 47)),
            ColorBand::new(BandColor::Orange, HsvRange::new(7, 14, 67, 72, 85, 95)),
        ])
    }
}
