use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::blob::{blob_metrics, label_blobs, Blob};
use crate::image_pipeline::buffer::{Channels, PixelBuffer};
use crate::image_pipeline::color::{hsv_segmentation, rgb_to_gray, rgb_to_hsv};
use crate::image_pipeline::common::error::{Result, VisionError};
use crate::image_pipeline::common::timing::{PipelineTimings, Timer};
use crate::image_pipeline::detection::source::FrameSource;
use crate::image_pipeline::detection::tally::ResistorTally;
use crate::image_pipeline::detection::types::{
    DetectionConfig, FrameReport, ResistorDetection, SequenceSummary,
};
use crate::image_pipeline::morphology::{binary_close_iterated, binary_erode_iterated};
use crate::image_pipeline::netpbm::{ImageEncoder, NetpbmWriter};
use crate::image_pipeline::resistor::{decode_resistance, detect_band_colors};

/// Per-frame resistor detection: segmentation, mask cleanup, blob analysis
/// and band decoding of every resistor-sized blob.
pub struct ResistorPipeline<W: ImageEncoder> {
    writer: W,
    config: DetectionConfig,
}

impl ResistorPipeline<NetpbmWriter> {
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            writer: NetpbmWriter,
            config,
        }
    }
}

fn timed<T>(timings: &mut PipelineTimings, name: &str, step: impl FnOnce() -> Result<T>) -> Result<T> {
    let _span = tracing::info_span!("step", step = name).entered();
    let timer = Timer::start(name);
    let result = step();
    let (name, duration) = timer.stop();
    timings.add_step(name, duration);
    result
}

impl<W: ImageEncoder> ResistorPipeline<W> {
    /// Uses `writer` for the debug artifacts.
    pub fn with_custom(writer: W, config: DetectionConfig) -> Self {
        Self { writer, config }
    }

    fn validate_frame(&self, frame: &PixelBuffer) -> Result<()> {
        frame.ensure_channels(Channels::Rgb, "video frame")?;
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let (width, height) = (frame.width(), frame.height());
        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Frame dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(VisionError::InvalidDimensions(width, height));
            }
        }
        Ok(())
    }

    fn dump(&self, name: &str, image: &PixelBuffer) {
        let Some(dir) = &self.config.debug_dump_dir else {
            return;
        };
        let path = dir.join(name);
        match self.writer.write_file(image, &path) {
            Ok(()) => debug!("Wrote {}", path.display()),
            Err(e) => warn!("Failed to write debug image {}: {}", path.display(), e),
        }
    }

    /// Binary mask of resistor bodies, closed and eroded.
    fn body_mask(&self, frame: &PixelBuffer, timings: &mut PipelineTimings) -> Result<PixelBuffer> {
        let (w, h) = (frame.width(), frame.height());

        let hsv = timed(timings, "rgb_to_hsv", || {
            let mut hsv = PixelBuffer::new(w, h, Channels::Rgb, frame.levels())?;
            rgb_to_hsv(frame, &mut hsv)?;
            Ok(hsv)
        })?;

        let gray = timed(timings, "segmentation", || {
            let mut segmented = PixelBuffer::new(w, h, Channels::Rgb, 255)?;
            hsv_segmentation(&hsv, &mut segmented, &self.config.segmentation)?;
            let mut gray = PixelBuffer::new(w, h, Channels::Gray, 255)?;
            rgb_to_gray(&segmented, &mut gray)?;
            Ok(gray)
        })?;
        hsv.free();

        let closed = timed(timings, "close", || {
            let mut closed = PixelBuffer::new(w, h, Channels::Gray, 255)?;
            binary_close_iterated(&gray, &mut closed, self.config.close_iterations)?;
            Ok(closed)
        })?;
        self.dump("close.pgm", &closed);

        let eroded = timed(timings, "erode", || {
            let mut eroded = PixelBuffer::new(w, h, Channels::Gray, 255)?;
            binary_erode_iterated(&closed, &mut eroded, self.config.erode_iterations)?;
            Ok(eroded)
        })?;
        self.dump("erode.pgm", &eroded);

        Ok(eroded)
    }

    fn analyze_candidate(&self, frame: &PixelBuffer, blob: &Blob) -> Result<ResistorDetection> {
        let bbox = blob.bbox;
        let crop = frame.crop(bbox.x, bbox.y, bbox.x_end(), bbox.y_end())?;
        let mut hsv = PixelBuffer::new(crop.width(), crop.height(), Channels::Rgb, crop.levels())?;
        rgb_to_hsv(&crop, &mut hsv)?;

        let bands = detect_band_colors(&hsv, &self.config.band_table)?;
        let resistance = decode_resistance(&bands).ok();
        Ok(ResistorDetection {
            blob: blob.clone(),
            bands,
            resistance,
        })
    }

    /// Runs detection on one RGB frame.
    ///
    /// Candidate blobs whose analysis fails are logged and skipped; errors
    /// are returned only when the frame as a whole cannot be processed.
    #[instrument(skip(self, frame), fields(width = frame.width(), height = frame.height()))]
    pub fn process_frame(&self, frame: &PixelBuffer) -> Result<FrameReport> {
        let mut timings = PipelineTimings::new();

        timed(&mut timings, "validate_frame", || self.validate_frame(frame))?;

        let mask = self.body_mask(frame, &mut timings)?;

        let blobs = timed(&mut timings, "blob_analysis", || {
            let mut labeled = PixelBuffer::new(mask.width(), mask.height(), Channels::Gray, 255)?;
            let mut blobs = label_blobs(&mask, &mut labeled)?;
            blob_metrics(&labeled, &mut blobs)?;
            Ok(blobs)
        })?;
        let blob_count = blobs.len();

        let candidates: Vec<Blob> = blobs
            .into_iter()
            .filter(|b| b.area > self.config.min_blob_area)
            .filter(|b| self.config.is_candidate(b))
            .collect();
        debug!("{} of {} blobs are resistor candidates", candidates.len(), blob_count);

        let detections = timed(&mut timings, "decode_bands", || {
            let mut detections = Vec::with_capacity(candidates.len());
            for blob in &candidates {
                match self.analyze_candidate(frame, blob) {
                    Ok(detection) => detections.push(detection),
                    Err(e) => warn!("Skipping blob {}: {}", blob.label, e),
                }
            }
            Ok(detections)
        })?;

        for detection in &detections {
            info!(
                "Blob {} at ({}, {}): {}",
                detection.blob.label,
                detection.blob.bbox.x,
                detection.blob.bbox.y,
                detection.description()
            );
        }
        info!(
            "Frame processed: {} blobs, {} candidates in {:.3}ms",
            blob_count,
            detections.len(),
            timings.total_duration().as_secs_f64() * 1000.0
        );

        Ok(FrameReport {
            blob_count,
            detections,
            timings,
        })
    }

    /// Processes every frame of `source`, feeding decoded resistors into
    /// `tally`. Frames that fail are logged and counted; a failing source
    /// stops the run.
    #[instrument(skip_all)]
    pub fn process_source(
        &self,
        source: &mut dyn FrameSource,
        tally: &mut ResistorTally,
    ) -> Result<SequenceSummary> {
        let mut summary = SequenceSummary::default();

        while let Some(frame) = source.next_frame()? {
            summary.frames += 1;
            match self.process_frame(&frame) {
                Ok(report) => {
                    tally.record_frame(&report);
                    summary.timings.extend(&report.timings);
                }
                Err(e) => {
                    warn!("Frame {} failed: {}", summary.frames, e);
                    summary.failed_frames += 1;
                }
            }
        }

        info!(
            "Processed {} frames ({} failed), {} distinct resistors",
            summary.frames,
            summary.failed_frames,
            tally.distinct().len()
        );
        Ok(summary)
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DetectionConfig) {
        self.config = config;
    }
}
