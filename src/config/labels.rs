use crate::labels::LabelMergeOptions;
use serde::Deserialize;
use std::path::PathBuf;

/// Config of the `merge_labels` tool.
#[derive(Debug, Deserialize)]
pub struct LabelToolConfig {
    /// JSON array of `{bbox, text, confidence}` fragments.
    pub input: PathBuf,
    #[serde(default)]
    pub merge: LabelMergeOptions,
    pub output: LabelOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LabelOutputConfig {
    pub labels_json: PathBuf,
}
