use crate::binarize::ThresholdOptions;
use serde::{Deserialize, Serialize};

/// Thresholds of the arrow reconstruction stages, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowOptions {
    /// Adaptive threshold used when the input is a raw raster.
    pub threshold: ThresholdOptions,
    /// Length of the line element used to isolate strokes of one axis.
    pub line_kernel_len: usize,
    /// Radius of the square dilation bridging small gaps (1 → 3×3).
    pub bridge_radius: usize,
    /// Strokes shorter than this along their axis are noise.
    pub min_segment_length: i32,
    /// Two strokes touch when any endpoints are at most this far apart.
    pub joint_radius: f32,
    /// Margin around a stroke rectangle that still counts as a T-junction.
    pub junction_margin: i32,
    /// An endpoint closer than this to another member's endpoint is internal.
    pub absorb_radius: f32,
    /// Margin around another member's rectangle that absorbs an endpoint.
    pub absorb_margin: i32,
    /// Half-size of the square window used to measure ink density at an end.
    pub tip_window_radius: i32,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            threshold: ThresholdOptions::default(),
            line_kernel_len: 15,
            bridge_radius: 1,
            min_segment_length: 10,
            joint_radius: 15.0,
            junction_margin: 5,
            absorb_radius: 12.0,
            absorb_margin: 8,
            tip_window_radius: 15,
        }
    }
}
