//! Per-image diagnostics returned next to the parsed document.

mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};

use crate::document::DiagramDocument;
use serde::Serialize;

/// Counts collected along the parse of one image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    /// Detections returned by the node detector.
    pub node_detections: usize,
    /// Detections kept after the confidence gate.
    pub nodes: usize,
    /// Fragments returned by the full-image text pass.
    pub text_fragments: usize,
    /// Fragments left after removing those inside node boxes.
    pub label_fragments: usize,
    pub labels: usize,
    pub segments: usize,
    pub groups: usize,
    pub arrows: usize,
}

/// Document plus diagnostics for one parsed image.
#[derive(Clone, Debug, Serialize)]
pub struct ParseReport {
    pub document: DiagramDocument,
    pub counts: StageCounts,
    pub timing: TimingBreakdown,
}
