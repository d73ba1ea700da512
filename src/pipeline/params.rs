//! Parameters of the full diagram parse.
use crate::arrows::ArrowOptions;
use crate::labels::LabelMergeOptions;
use serde::{Deserialize, Serialize};

/// Knobs for node handling plus the options of both engines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserParams {
    /// Node detections below this confidence are ignored.
    pub node_confidence: f32,
    /// Padding around a node box for text recognition and whitening.
    pub node_padding: i32,
    pub labels: LabelMergeOptions,
    pub arrows: ArrowOptions,
}

impl Default for ParserParams {
    fn default() -> Self {
        Self {
            node_confidence: 0.5,
            node_padding: 4,
            labels: LabelMergeOptions::default(),
            arrows: ArrowOptions::default(),
        }
    }
}
