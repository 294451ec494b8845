use std::path::PathBuf;

use anyhow::{bail, Context};
use resistor_vision::image_pipeline::{
    DetectionConfig, NetpbmSequence, ResistorPipeline, ResistorTally,
};
use resistor_vision::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let mut dump_dir = None;
    let mut frames = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--dump-dir" {
            let dir = args.next().context("--dump-dir needs a directory")?;
            dump_dir = Some(PathBuf::from(dir));
        } else {
            frames.push(PathBuf::from(arg));
        }
    }
    if frames.is_empty() {
        bail!("usage: resistor_vision [--dump-dir DIR] FRAME.ppm...");
    }

    info!("Starting resistor detection on {} frames", frames.len());

    let config = DetectionConfig::builder().debug_dump_dir(dump_dir).build();
    let pipeline = ResistorPipeline::new(config);
    info!(
        "Candidate area: ({}, {})",
        pipeline.config().candidate_min_area,
        pipeline.config().candidate_max_area
    );

    let mut source = NetpbmSequence::new(frames);
    let mut tally = ResistorTally::new();
    let summary = pipeline
        .process_source(&mut source, &mut tally)
        .context("reading frames")?;

    tally.print_summary();
    summary.timings.print_summary();

    if summary.failed_frames > 0 {
        info!("{} of {} frames failed", summary.failed_frames, summary.frames);
    }
    Ok(())
}
