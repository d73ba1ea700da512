use diagram_parser::arrows::{Arrow, ArrowEngine, StrokeSegment};
use diagram_parser::binarize::adaptive_threshold;
use diagram_parser::config::{arrows::ArrowToolConfig, load_json_config};
use diagram_parser::image::io::{load_grayscale_image, save_mask_png, write_json_file};
use diagram_parser::DiagramError;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DiagramError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: ArrowToolConfig = load_json_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let mask = adaptive_threshold(&gray.as_view(), config.arrows.threshold);
    let engine = ArrowEngine::new(config.arrows.clone());
    let result = engine.detect_in_mask(&mask);

    let report = ArrowReport {
        discarded_groups: result.discarded(),
        elapsed_ms: result.elapsed_ms,
        segments: result.segments,
        arrows: result.arrows,
    };
    write_json_file(&config.output.arrows_json, &report)?;
    if let Some(path) = &config.output.mask_image {
        save_mask_png(&mask, path)?;
        println!("Saved ink mask to {}", path.display());
    }

    println!(
        "Detected {} arrows from {} segments ({} closed groups dropped) in {:.2} ms",
        report.arrows.len(),
        report.segments.len(),
        report.discarded_groups,
        report.elapsed_ms
    );
    println!("Saved arrows to {}", config.output.arrows_json.display());
    Ok(())
}

fn usage() -> DiagramError {
    DiagramError::Usage("Usage: detect_arrows <config.json>".to_string())
}

#[derive(Debug, Serialize)]
struct ArrowReport {
    arrows: Vec<Arrow>,
    segments: Vec<StrokeSegment>,
    discarded_groups: usize,
    elapsed_ms: f64,
}
