use serde::{Deserialize, Serialize};

/// Join thresholds of the label merger, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelMergeOptions {
    /// Top edges closer than this count as one text line.
    pub same_line_tolerance: i32,
    /// Exclusive lower bound of the horizontal gap (negative allows overlap).
    pub min_horizontal_gap: i32,
    /// Exclusive upper bound of the horizontal gap.
    pub max_horizontal_gap: i32,
    /// Exclusive upper bound of the vertical gap between stacked lines.
    pub max_vertical_gap: i32,
    /// Stacked boxes must overlap by more than this share of the narrower width.
    pub min_overlap_ratio: f32,
}

impl Default for LabelMergeOptions {
    fn default() -> Self {
        Self {
            same_line_tolerance: 12,
            min_horizontal_gap: -10,
            max_horizontal_gap: 50,
            max_vertical_gap: 35,
            min_overlap_ratio: 0.5,
        }
    }
}
