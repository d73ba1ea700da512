//! Node records built from detector output.
use crate::types::{BoxXyxy, Point};
use serde::{Deserialize, Serialize};

/// One shape reported by the node detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeDetection {
    /// Detector class, e.g. `"task"` or `"gateway"`.
    #[serde(rename = "class")]
    pub class_name: String,
    pub bbox: BoxXyxy,
    #[serde(default = "full_confidence")]
    pub confidence: f32,
}

fn full_confidence() -> f32 {
    1.0
}

/// Node entry of the output document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub txt: String,
    pub cnt: Point,
    pub wh: [i32; 2],
}

impl NodeRecord {
    /// Record for the `index`-th accepted detection.
    pub fn from_detection(index: usize, detection: &NodeDetection, txt: String) -> Self {
        Self {
            id: format!("n{index}"),
            kind: detection.class_name.clone(),
            txt,
            cnt: detection.bbox.center(),
            wh: detection.bbox.size(),
        }
    }
}

/// Drop stray single characters from recognized node text.
///
/// Words survive when they are longer than one character or made only of
/// digits; survivors are joined with single spaces.
pub fn clean_node_text(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 1 || w.chars().all(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ")
}
