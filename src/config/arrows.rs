use crate::arrows::ArrowOptions;
use serde::Deserialize;
use std::path::PathBuf;

/// Config of the `detect_arrows` tool.
#[derive(Debug, Deserialize)]
pub struct ArrowToolConfig {
    /// Raster to analyse, converted to grayscale on load.
    pub input: PathBuf,
    #[serde(default)]
    pub arrows: ArrowOptions,
    pub output: ArrowOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ArrowOutputConfig {
    pub arrows_json: PathBuf,
    /// Optional PNG dump of the binarized ink mask.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
}
