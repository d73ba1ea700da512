//! Batch driver: parse every raster of a directory into JSON documents.
//!
//! Images are independent, so with the `parallel` feature they are processed
//! on the rayon pool. A raster that cannot be decoded or parsed yields an
//! empty document and a warning; the run goes on.
use crate::collaborators::{NodeDetector, SourceImage, TextRecognizer};
use crate::document::DiagramDocument;
use crate::error::{DiagramError, Result};
use crate::image::io::{load_rgb_image, write_json_file};
use crate::pipeline::DiagramParser;
use log::{info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Outcome of a batch run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BatchSummary {
    /// Rasters visited, failed ones included.
    pub processed: usize,
    /// Rasters that produced an empty document because of an error.
    pub failed: usize,
    /// Written documents in input order.
    pub outputs: Vec<PathBuf>,
}

struct ImageOutcome {
    output: PathBuf,
    failed: bool,
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Raster files directly inside `dir`, sorted by path.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| DiagramError::io(dir, e))?;
    let mut images = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DiagramError::io(dir, e))?.path();
        if path.is_file() && is_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}.json"))
}

fn parse_file<D, R>(parser: &DiagramParser<D, R>, input: &Path) -> Result<DiagramDocument>
where
    D: NodeDetector,
    R: TextRecognizer,
{
    let pixels = load_rgb_image(input)?;
    let report = parser.parse(&SourceImage::new(file_name(input), pixels))?;
    Ok(report.document)
}

fn process_image<D, R>(parser: &DiagramParser<D, R>, input: &Path, output_dir: &Path) -> ImageOutcome
where
    D: NodeDetector,
    R: TextRecognizer,
{
    let output = output_path(input, output_dir);
    let (document, mut failed) = match parse_file(parser, input) {
        Ok(doc) => (doc, false),
        Err(err) => {
            warn!("Skipping {}: {err}", input.display());
            (DiagramDocument::empty(file_name(input)), true)
        }
    };
    if let Err(err) = write_json_file(&output, &document) {
        warn!("Failed to write {}: {err}", output.display());
        failed = true;
    }
    ImageOutcome { output, failed }
}

/// Parse each of `inputs` and write `<output_dir>/<stem>.json`.
///
/// Only failing to create `output_dir` aborts the run.
pub fn run_batch<D, R>(
    parser: &DiagramParser<D, R>,
    inputs: &[PathBuf],
    output_dir: &Path,
) -> Result<BatchSummary>
where
    D: NodeDetector,
    R: TextRecognizer,
{
    let start = Instant::now();
    fs::create_dir_all(output_dir).map_err(|e| DiagramError::io(output_dir, e))?;

    #[cfg(feature = "parallel")]
    let outcomes: Vec<ImageOutcome> = inputs
        .par_iter()
        .map(|input| process_image(parser, input, output_dir))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<ImageOutcome> = inputs
        .iter()
        .map(|input| process_image(parser, input, output_dir))
        .collect();

    let summary = BatchSummary {
        processed: outcomes.len(),
        failed: outcomes.iter().filter(|o| o.failed).count(),
        outputs: outcomes.into_iter().map(|o| o.output).collect(),
    };
    info!(
        "Batch: processed={} failed={} elapsed_ms={:.1}",
        summary.processed,
        summary.failed,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(summary)
}
