//! Image processing pipeline module
//!
//! Byte-level image buffers and the operations built on them: color space
//! conversion, filtering, binary morphology, blob analysis and Netpbm I/O,
//! composed into a per-frame resistor detection pipeline.

pub mod blob;
pub mod buffer;
pub mod color;
pub mod common;
pub mod detection;
pub mod filters;
pub mod morphology;
pub mod netpbm;
pub mod resistor;

pub use common::{PipelineTimings, Result, StepTiming, Timer, VisionError};

pub use buffer::{Channels, PixelBuffer, BACKGROUND, FOREGROUND};

pub use blob::{Blob, BoundingBox};

pub use netpbm::{read_image, write_image, ImageDecoder, ImageEncoder, NetpbmReader, NetpbmWriter};

pub use resistor::{BandColor, BandTable, ColorBand, FoundColor, Resistance};

pub use detection::{
    DetectionConfig, DetectionConfigBuilder, FrameReport, FrameSource, NetpbmSequence,
    ResistorDetection, ResistorPipeline, ResistorTally, SequenceSummary,
};
