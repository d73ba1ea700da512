use diagram_parser::config::{labels::LabelToolConfig, load_json_config};
use diagram_parser::image::io::{read_json_file, write_json_file};
use diagram_parser::labels::{LabelMerger, TextDetection};
use diagram_parser::DiagramError;
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
    let config: LabelToolConfig = load_json_config(Path::new(&config_path))?;

    let fragments: Vec<TextDetection> = read_json_file(&config.input)?;
    let labels = LabelMerger::new(config.merge).merge(&fragments);
    write_json_file(&config.output.labels_json, &labels)?;

    println!(
        "Merged {} fragments into {} labels, saved to {}",
        fragments.len(),
        labels.len(),
        config.output.labels_json.display()
    );
    Ok(())
}

fn usage() -> DiagramError {
    DiagramError::Usage("Usage: merge_labels <config.json>".to_string())
}
