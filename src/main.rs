use diagram_parser::batch::{collect_images, run_batch};
use diagram_parser::collaborators::SidecarAnnotations;
use diagram_parser::config::{batch::BatchConfig, load_json_config};
use diagram_parser::{DiagramError, DiagramParser};
use log::info;
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
    let config: BatchConfig = load_json_config(Path::new(&config_path))?;

    let inputs = collect_images(&config.input_dir)?;
    info!(
        "Found {} images in {}",
        inputs.len(),
        config.input_dir.display()
    );

    let annotations = SidecarAnnotations::new(config.sidecar_dir());
    let parser = DiagramParser::new(config.parser.clone(), &annotations, &annotations);
    let summary = run_batch(&parser, &inputs, &config.output_dir)?;

    println!(
        "Parsed {} images ({} failed) into {}",
        summary.processed,
        summary.failed,
        config.output_dir.display()
    );
    Ok(())
}

fn usage() -> DiagramError {
    DiagramError::Usage("Usage: diagram-parser <config.json>".to_string())
}
