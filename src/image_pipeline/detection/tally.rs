use std::collections::HashMap;

use crate::image_pipeline::detection::types::{FrameReport, ResistorDetection};
use crate::image_pipeline::resistor::{BandColor, Resistance};

/// Bands seen on one labeled blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBands {
    pub label: u8,
    pub colors: Vec<BandColor>,
}

/// Running record of the resistors seen across frames.
///
/// Every distinct resistance gets a number, starting at 1, the first time it
/// is decoded; later sightings reuse it. Owned by the caller and fed one
/// frame at a time.
#[derive(Debug, Clone, Default)]
pub struct ResistorTally {
    numbers: HashMap<Resistance, usize>,
    distinct: Vec<Resistance>,
    history: Vec<LabelBands>,
}

impl ResistorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one detection and returns the number of its resistance.
    ///
    /// Detections without bands are ignored; detections with bands but no
    /// value enter the band history without a number.
    pub fn record(&mut self, detection: &ResistorDetection) -> Option<usize> {
        if detection.bands.is_empty() {
            return None;
        }
        self.history.push(LabelBands {
            label: detection.blob.label,
            colors: detection.bands.iter().map(|b| b.color).collect(),
        });

        let resistance = detection.resistance?;
        let next = self.distinct.len() + 1;
        let number = *self.numbers.entry(resistance).or_insert(next);
        if number == next {
            self.distinct.push(resistance);
        }
        Some(number)
    }

    /// Records every detection of a frame, in report order.
    pub fn record_frame(&mut self, report: &FrameReport) -> Vec<Option<usize>> {
        report.detections.iter().map(|d| self.record(d)).collect()
    }

    pub fn number_of(&self, resistance: &Resistance) -> Option<usize> {
        self.numbers.get(resistance).copied()
    }

    /// Distinct resistances in first-seen order; entry `i` has number `i + 1`.
    pub fn distinct(&self) -> &[Resistance] {
        &self.distinct
    }

    pub fn history(&self) -> &[LabelBands] {
        &self.history
    }

    pub fn print_summary(&self) {
        println!("\nDetected resistors:");
        println!("{:-<60}", "");
        for (i, resistance) in self.distinct.iter().enumerate() {
            println!("[{}] {}", i + 1, resistance);
        }
        println!("{:-<60}", "");
        println!("Analyzed labels:");
        for entry in &self.history {
            let colors: Vec<&str> = entry.colors.iter().map(|c| c.name()).collect();
            println!("#{}: {}", entry.label, colors.join(" "));
        }
    }
}
