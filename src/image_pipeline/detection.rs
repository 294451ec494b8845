//! Resistor detection module
//!
//! The per-frame pipeline tying segmentation, morphology, blob analysis and
//! band decoding together, plus its configuration, frame sources and the
//! cross-frame resistor tally.

mod pipeline;
mod source;
mod tally;
mod types;


pub use pipeline::ResistorPipeline;
pub use source::{FrameSource, NetpbmSequence};
pub use tally::{LabelBands, ResistorTally};
pub use types::{
    DetectionConfig, DetectionConfigBuilder, FrameReport, ResistorDetection, SequenceSummary,
};
