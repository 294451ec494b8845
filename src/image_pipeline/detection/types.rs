use std::path::PathBuf;

use crate::image_pipeline::blob::Blob;
use crate::image_pipeline::color::HsvRange;
use crate::image_pipeline::common::timing::PipelineTimings;
use crate::image_pipeline::resistor::{describe_resistance, BandTable, FoundColor, Resistance};

#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// Window separating resistor bodies from the background
    pub segmentation: HsvRange,
    /// 3×3 dilations (then as many erosions) closing gaps left by dark bands
    pub close_iterations: usize,
    /// 3×3 erosions applied after closing
    pub erode_iterations: usize,
    /// Blobs must be strictly larger than this to be kept after labeling
    pub min_blob_area: usize,
    /// Exclusive lower bound of a resistor candidate's area
    pub candidate_min_area: usize,
    /// Exclusive upper bound of a resistor candidate's area
    pub candidate_max_area: usize,
    pub band_table: BandTable,
    pub validate_dimensions: bool,
    pub max_dimension: Option<usize>,
    /// Directory receiving the closed and eroded masks of every frame
    pub debug_dump_dir: Option<PathBuf>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            segmentation: HsvRange::new(15, 360, 30, 100, 30, 100),
            close_iterations: 25,
            erode_iterations: 5,
            min_blob_area: 1600,
            candidate_min_area: 1200,
            candidate_max_area: 8000,
            band_table: BandTable::default(),
            validate_dimensions: true,
            max_dimension: Some(16384),
            debug_dump_dir: None,
        }
    }
}

impl DetectionConfig {
    pub fn builder() -> DetectionConfigBuilder {
        DetectionConfigBuilder::default()
    }

    pub(crate) fn is_candidate(&self, blob: &Blob) -> bool {
        blob.area > self.candidate_min_area && blob.area < self.candidate_max_area
    }
}

#[derive(Default)]
pub struct DetectionConfigBuilder {
    segmentation: Option<HsvRange>,
    close_iterations: Option<usize>,
    erode_iterations: Option<usize>,
    min_blob_area: Option<usize>,
    candidate_area: Option<(usize, usize)>,
    band_table: Option<BandTable>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    debug_dump_dir: Option<Option<PathBuf>>,
}

impl DetectionConfigBuilder {
    pub fn segmentation(mut self, range: HsvRange) -> Self {
        self.segmentation = Some(range);
        self
    }

    pub fn close_iterations(mut self, iterations: usize) -> Self {
        self.close_iterations = Some(iterations);
        self
    }

    pub fn erode_iterations(mut self, iterations: usize) -> Self {
        self.erode_iterations = Some(iterations);
        self
    }

    pub fn min_blob_area(mut self, area: usize) -> Self {
        self.min_blob_area = Some(area);
        self
    }

    /// Exclusive `(min, max)` area bounds for resistor candidates.
    pub fn candidate_area(mut self, min: usize, max: usize) -> Self {
        self.candidate_area = Some((min, max));
        self
    }

    pub fn band_table(mut self, table: BandTable) -> Self {
        self.band_table = Some(table);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn debug_dump_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.debug_dump_dir = Some(dir);
        self
    }

    pub fn build(self) -> DetectionConfig {
        let default = DetectionConfig::default();
        let (candidate_min_area, candidate_max_area) = self
            .candidate_area
            .unwrap_or((default.candidate_min_area, default.candidate_max_area));
        DetectionConfig {
            segmentation: self.segmentation.unwrap_or(default.segmentation),
            close_iterations: self.close_iterations.unwrap_or(default.close_iterations),
            erode_iterations: self.erode_iterations.unwrap_or(default.erode_iterations),
            min_blob_area: self.min_blob_area.unwrap_or(default.min_blob_area),
            candidate_min_area,
            candidate_max_area,
            band_table: self.band_table.unwrap_or(default.band_table),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            debug_dump_dir: self.debug_dump_dir.unwrap_or(default.debug_dump_dir),
        }
    }
}

/// One resistor candidate of a frame.
#[derive(Debug, Clone)]
pub struct ResistorDetection {
    pub blob: Blob,
    /// Bands found in the crop, left to right
    pub bands: Vec<FoundColor>,
    /// `None` when fewer than three bands were found
    pub resistance: Option<Resistance>,
}

impl ResistorDetection {
    /// Text drawn next to the resistor.
    pub fn description(&self) -> String {
        describe_resistance(&self.bands)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Blobs left after labeling, before any area filter
    pub blob_count: usize,
    pub detections: Vec<ResistorDetection>,
    pub timings: PipelineTimings,
}

impl FrameReport {
    /// Detections that produced a resistance value.
    pub fn decoded(&self) -> impl Iterator<Item = (&ResistorDetection, &Resistance)> {
        self.detections
            .iter()
            .filter_map(|d| d.resistance.as_ref().map(|r| (d, r)))
    }
}

/// Outcome of running the pipeline over a whole frame source.
#[derive(Debug, Clone, Default)]
pub struct SequenceSummary {
    pub frames: usize,
    pub failed_frames: usize,
    pub timings: PipelineTimings,
}
