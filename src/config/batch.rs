use crate::pipeline::ParserParams;
use serde::Deserialize;
use std::path::PathBuf;

/// Config of the `diagram-parser` batch driver.
#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned for `.png`/`.jpg`/`.jpeg` rasters.
    pub input_dir: PathBuf,
    /// Directory of precomputed detection sidecars; defaults to `input_dir`.
    #[serde(default)]
    pub sidecar_dir: Option<PathBuf>,
    /// One `<stem>.json` document is written here per raster.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub parser: ParserParams,
}

impl BatchConfig {
    pub fn sidecar_dir(&self) -> &PathBuf {
        self.sidecar_dir.as_ref().unwrap_or(&self.input_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_params_are_optional() {
        let cfg: BatchConfig =
            serde_json::from_str(r#"{"input_dir": "in", "output_dir": "out"}"#).unwrap();
        assert_eq!(cfg.sidecar_dir(), &PathBuf::from("in"));
        assert_eq!(cfg.parser, ParserParams::default());
    }

    #[test]
    fn nested_overrides_keep_other_defaults() {
        let cfg: BatchConfig = serde_json::from_str(
            r#"{
                "input_dir": "in",
                "sidecar_dir": "ocr",
                "output_dir": "out",
                "parser": {"node_padding": 6, "arrows": {"joint_radius": 20.0}}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.sidecar_dir(), &PathBuf::from("ocr"));
        assert_eq!(cfg.parser.node_padding, 6);
        assert_eq!(cfg.parser.node_confidence, 0.5);
        assert_eq!(cfg.parser.arrows.joint_radius, 20.0);
        assert_eq!(cfg.parser.arrows.min_segment_length, 10);
    }
}
