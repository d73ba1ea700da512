use crate::types::{BoxXyxy, Point};
use serde::{Deserialize, Serialize};

/// One raw text fragment reported by the recognizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextDetection {
    pub bbox: BoxXyxy,
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
}

impl TextDetection {
    pub fn new(bbox: BoxXyxy, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            bbox,
            text: text.into(),
            confidence,
        }
    }
}

/// Label built from one or more fragments.
///
/// Only `txt`, `cnt` and `wh` are serialized; the union box and the indices of
/// the source fragments are kept for callers that need them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedLabel {
    pub txt: String,
    pub cnt: Point,
    pub wh: [i32; 2],
    #[serde(skip)]
    pub bbox: BoxXyxy,
    /// Indices into the merge input, in absorption order.
    #[serde(skip)]
    pub sources: Vec<usize>,
    /// Lowest confidence among the sources.
    #[serde(skip)]
    pub confidence: f32,
}

impl MergedLabel {
    /// View the label as a single fragment again.
    pub fn to_detection(&self) -> TextDetection {
        TextDetection::new(self.bbox, self.txt.clone(), self.confidence)
    }
}
