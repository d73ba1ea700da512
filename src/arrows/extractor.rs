use super::options::ArrowOptions;
use super::types::{Orientation, SegmentId, StrokeSegment};
use crate::image::BinaryMask;
use crate::morphology::{dilate_rect, open_line};
use crate::types::Rect;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::point::Point as ContourPoint;

/// Extract straight strokes from an ink mask: horizontal strokes first, then
/// vertical ones, each in contour discovery order.
pub fn extract_segments(mask: &BinaryMask, options: &ArrowOptions) -> Vec<StrokeSegment> {
    let mut segments = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let strokes = open_line(mask, orientation, options.line_kernel_len);
        let bridged = dilate_rect(&strokes, options.bridge_radius);
        for rect in external_bounding_rects(&bridged) {
            let id = SegmentId(segments.len() as u32);
            if let Some(segment) =
                StrokeSegment::from_rect(id, rect, orientation, options.min_segment_length)
            {
                segments.push(segment);
            }
        }
    }
    segments
}

/// Bounding rectangles of the outermost contours (holes and anything nested
/// inside them are ignored).
fn external_bounding_rects(mask: &BinaryMask) -> Vec<Rect> {
    if mask.count_nonzero() == 0 {
        return Vec::new();
    }
    let contours: Vec<Contour<i32>> = find_contours(&mask.to_gray_image());
    contours
        .iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter_map(|c| bounding_rect(&c.points))
        .collect()
}

fn bounding_rect(points: &[ContourPoint<i32>]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}
