//! Orthogonal arrow reconstruction.
//!
//! A connector in a rendered diagram is a chain of straight horizontal and
//! vertical strokes joined at corners, ending in a small filled arrowhead.
//! The engine recovers that structure from pixels alone:
//!
//! - Stroke extraction: for each axis, open the ink mask with a long thin
//!   line element, bridge small gaps with a 3×3 dilation, and take the
//!   bounding rectangles of the outer contours. Rectangles shorter than the
//!   length floor along their axis are dropped. Endpoints sit at the midpoints
//!   of the short edges.
//! - Adjacency: two strokes touch when endpoints meet (elbow) or when an
//!   endpoint lands on the other stroke's grown rectangle (T-junction).
//! - Grouping: connected components of the adjacency graph, by BFS.
//! - External endpoints: an endpoint is internal when another member of its
//!   group absorbs it; the rest are the visible free ends of the connector.
//! - Tip: the free end with the densest ink in a small window (arrowheads are
//!   filled triangles). The other free ends are starts.
//! - Emission: groups without free ends are closed shapes and are dropped;
//!   emitted groups get consecutive ids `arrow_0`, `arrow_1`, ...
//!
//! Every stroke belongs to exactly one group. All state is local to one call,
//! so images can be processed concurrently.

mod endpoints;
mod extractor;
mod graph;
mod options;
mod tip;
mod types;

pub use endpoints::external_endpoints;
pub use extractor::extract_segments;
pub use graph::{segments_touch, SegmentGraph};
pub use options::ArrowOptions;
pub use tip::{local_density, select_tip};
pub use types::{Arrow, ArrowGroup, Orientation, SegmentId, StrokeSegment};

use crate::binarize::adaptive_threshold;
use crate::image::{BinaryMask, ImageU8};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Output of one reconstruction run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ArrowResult {
    /// Emitted arrows with consecutive ids.
    pub arrows: Vec<Arrow>,
    /// Every group, emitted or discarded, in traversal order.
    pub groups: Vec<ArrowGroup>,
    pub segments: Vec<StrokeSegment>,
    pub elapsed_ms: f64,
}

impl ArrowResult {
    /// Number of groups dropped for having no free end.
    pub fn discarded(&self) -> usize {
        self.groups.iter().filter(|g| !g.is_emitted()).count()
    }
}

/// Arrow reconstruction with fixed options.
#[derive(Clone, Debug, Default)]
pub struct ArrowEngine {
    options: ArrowOptions,
}

impl ArrowEngine {
    pub fn new(options: ArrowOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ArrowOptions {
        &self.options
    }

    /// Binarize a grayscale raster and reconstruct its arrows.
    pub fn detect(&self, gray: &ImageU8<'_>) -> ArrowResult {
        let mask = adaptive_threshold(gray, self.options.threshold);
        self.detect_in_mask(&mask)
    }

    /// Reconstruct arrows from an existing ink mask.
    pub fn detect_in_mask(&self, mask: &BinaryMask) -> ArrowResult {
        let start = Instant::now();
        let segments = extract_segments(mask, &self.options);
        debug!(
            "ArrowEngine: extracted {} segments in {:.3} ms",
            segments.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        let mut result = self.reconstruct(segments, mask);
        result.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        result
    }

    /// Group already-extracted strokes and resolve their tips against `mask`.
    pub fn reconstruct(&self, segments: Vec<StrokeSegment>, mask: &BinaryMask) -> ArrowResult {
        let start = Instant::now();
        if segments.is_empty() {
            return ArrowResult::default();
        }

        let graph = SegmentGraph::build(&segments, &self.options);
        let mut groups = Vec::new();
        let mut arrows = Vec::new();
        for component in graph.components() {
            let members: Vec<&StrokeSegment> = component.iter().map(|&i| &segments[i]).collect();
            let external = external_endpoints(&members, &self.options);
            let (tip, starts) = select_tip(mask, &external, self.options.tip_window_radius);
            let group = ArrowGroup {
                members: members.iter().map(|s| s.id).collect(),
                external,
                tip,
                starts,
            };
            if group.is_emitted() {
                arrows.push(Arrow {
                    id: format!("arrow_{}", arrows.len()),
                    tip: group.tip,
                    starts: group.starts.clone(),
                });
            }
            groups.push(group);
        }

        debug!(
            "ArrowEngine: segments={} edges={} groups={} emitted={}",
            segments.len(),
            graph.edge_count(),
            groups.len(),
            arrows.len()
        );
        ArrowResult {
            arrows,
            groups,
            segments,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Binarize `gray` and reconstruct its arrows.
pub fn detect_arrows(gray: &ImageU8<'_>, options: &ArrowOptions) -> ArrowResult {
    ArrowEngine::new(options.clone()).detect(gray)
}

/// Reconstruct arrows from a binary ink mask.
pub fn detect_arrows_in_mask(mask: &BinaryMask, options: &ArrowOptions) -> ArrowResult {
    ArrowEngine::new(options.clone()).detect_in_mask(mask)
}

/// Group pre-extracted strokes and resolve tips against `mask`.
pub fn reconstruct_arrows(
    segments: Vec<StrokeSegment>,
    mask: &BinaryMask,
    options: &ArrowOptions,
) -> ArrowResult {
    ArrowEngine::new(options.clone()).reconstruct(segments, mask)
}

#[cfg(test)]
mod tests;
