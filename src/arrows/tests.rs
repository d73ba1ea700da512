use super::*;
use crate::types::Rect;

fn seg(id: u32, rect: Rect, orientation: Orientation) -> StrokeSegment {
    StrokeSegment::from_rect(SegmentId(id), rect, orientation, 0).expect("non-negative extent")
}

fn hseg(id: u32, x: i32, y: i32, w: i32) -> StrokeSegment {
    seg(id, Rect::new(x, y, w, 4), Orientation::Horizontal)
}

fn vseg(id: u32, x: i32, y: i32, h: i32) -> StrokeSegment {
    seg(id, Rect::new(x, y, 4, h), Orientation::Vertical)
}

/// Four strokes drawing an L: two collinear horizontal pieces, then two
/// collinear vertical pieces going down from the corner.
fn l_shape() -> Vec<StrokeSegment> {
    vec![
        hseg(0, 10, 48, 40),
        hseg(1, 55, 48, 45),
        vseg(2, 98, 50, 40),
        vseg(3, 98, 95, 45),
    ]
}

/// Four strokes whose endpoints all meet at the corners of a box.
fn closed_loop(first_id: u32) -> Vec<StrokeSegment> {
    vec![
        hseg(first_id, 10, 8, 90),
        vseg(first_id + 1, 98, 10, 70),
        hseg(first_id + 2, 10, 78, 90),
        vseg(first_id + 3, 8, 10, 70),
    ]
}

#[test]
fn stroke_endpoints_sit_on_short_edges() {
    let h = hseg(0, 10, 48, 40);
    assert_eq!(h.ends, [[10, 50], [50, 50]]);
    let v = vseg(1, 98, 50, 40);
    assert_eq!(v.ends, [[100, 50], [100, 90]]);
    assert_eq!(v.extent(), 40);
}

#[test]
fn short_rectangles_are_rejected_at_extraction() {
    let rect = Rect::new(20, 30, 6, 3);
    assert!(StrokeSegment::from_rect(SegmentId(0), rect, Orientation::Horizontal, 10).is_none());

    let mut mask = BinaryMask::new(60, 60);
    mask.fill_rect(20, 30, 26, 32);
    let segments = extract_segments(&mask, &ArrowOptions::default());
    assert!(segments.is_empty(), "got {segments:?}");
    assert!(detect_arrows_in_mask(&mask, &ArrowOptions::default())
        .groups
        .is_empty());
}

#[test]
fn long_stroke_is_extracted_with_bridged_rect() {
    let mut mask = BinaryMask::new(100, 60);
    mask.fill_rect(20, 30, 80, 32);
    let segments = extract_segments(&mask, &ArrowOptions::default());
    assert_eq!(segments.len(), 1, "got {segments:?}");
    let s = &segments[0];
    assert_eq!(s.orientation, Orientation::Horizontal);
    assert_eq!(s.rect, Rect::new(19, 29, 62, 4));
    assert_eq!(s.ends, [[19, 31], [81, 31]]);
}

#[test]
fn l_shape_has_two_free_ends_and_picks_dense_tip() {
    let mut mask = BinaryMask::new(200, 200);
    mask.fill_rect(10, 49, 50, 51);
    mask.fill_rect(92, 130, 109, 146);

    let result = reconstruct_arrows(l_shape(), &mask, &ArrowOptions::default());
    assert_eq!(result.groups.len(), 1);
    let group = &result.groups[0];
    assert_eq!(group.members.len(), 4);
    assert_eq!(group.external, vec![[10, 50], [100, 140]]);

    assert_eq!(result.arrows.len(), 1);
    let arrow = &result.arrows[0];
    assert_eq!(arrow.id, "arrow_0");
    assert_eq!(arrow.tip, Some([100, 140]));
    assert_eq!(arrow.starts, vec![[10, 50]]);
}

#[test]
fn closed_loop_is_discarded() {
    let mask = BinaryMask::new(200, 200);
    let result = reconstruct_arrows(closed_loop(0), &mask, &ArrowOptions::default());
    assert_eq!(result.groups.len(), 1);
    assert!(result.groups[0].external.is_empty());
    assert_eq!(result.groups[0].tip, None);
    assert!(result.arrows.is_empty());
    assert_eq!(result.discarded(), 1);
}

#[test]
fn emitted_ids_skip_discarded_groups() {
    let mut segments = vec![hseg(0, 10, 148, 60)];
    segments.extend(closed_loop(1));
    segments.push(hseg(5, 120, 178, 60));
    let mask = BinaryMask::new(200, 200);

    let result = reconstruct_arrows(segments, &mask, &ArrowOptions::default());
    assert_eq!(result.groups.len(), 3);
    let ids: Vec<&str> = result.arrows.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["arrow_0", "arrow_1"]);

    let mut members: Vec<u32> = result
        .groups
        .iter()
        .flat_map(|g| g.members.iter().map(|id| id.0))
        .collect();
    members.sort_unstable();
    assert_eq!(members, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn tie_prefers_lowest_then_rightmost_end() {
    let mask = BinaryMask::new(100, 100);
    let horizontal = reconstruct_arrows(vec![hseg(0, 10, 48, 50)], &mask, &ArrowOptions::default());
    assert_eq!(horizontal.arrows[0].tip, Some([60, 50]));
    assert_eq!(horizontal.arrows[0].starts, vec![[10, 50]]);

    let vertical = reconstruct_arrows(vec![vseg(0, 28, 10, 50)], &mask, &ArrowOptions::default());
    assert_eq!(vertical.arrows[0].tip, Some([30, 60]));
    assert_eq!(vertical.arrows[0].starts, vec![[30, 10]]);
}

#[test]
fn denser_end_beats_tie_break() {
    let mut mask = BinaryMask::new(100, 100);
    mask.fill_rect(5, 44, 16, 56);
    let result = reconstruct_arrows(vec![hseg(0, 10, 48, 50)], &mask, &ArrowOptions::default());
    assert_eq!(result.arrows[0].tip, Some([10, 50]));
    assert_eq!(result.arrows[0].starts, vec![[60, 50]]);
}

#[test]
fn single_free_end_becomes_tip_without_starts() {
    let (tip, starts) = select_tip(&BinaryMask::new(50, 50), &[[20, 20]], 15);
    assert_eq!(tip, Some([20, 20]));
    assert!(starts.is_empty());

    let (tip, starts) = select_tip(&BinaryMask::new(50, 50), &[], 15);
    assert_eq!(tip, None);
    assert!(starts.is_empty());
}

#[test]
fn starts_drop_every_copy_of_the_tip() {
    let mut mask = BinaryMask::new(100, 100);
    mask.fill_rect(40, 40, 60, 60);
    let (tip, starts) = select_tip(&mask, &[[5, 5], [50, 50], [50, 50], [90, 5]], 15);
    assert_eq!(tip, Some([50, 50]));
    assert_eq!(starts, vec![[5, 5], [90, 5]]);
}

#[test]
fn t_junction_connects_without_endpoint_joint() {
    let bar = hseg(0, 10, 48, 100);
    let stem = vseg(1, 58, 52, 40);
    let options = ArrowOptions::default();
    assert!(segments_touch(&bar, &stem, &options));
    assert!(segments_touch(&stem, &bar, &options));

    let graph = SegmentGraph::build(&[bar.clone(), stem.clone()], &options);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.components(), vec![vec![0, 1]]);

    let external = external_endpoints(&[&bar, &stem], &options);
    assert_eq!(external, vec![[10, 50], [110, 50], [60, 92]]);
}

#[test]
fn distant_strokes_stay_apart() {
    let a = hseg(0, 10, 10, 30);
    let b = hseg(1, 10, 60, 30);
    let options = ArrowOptions::default();
    assert!(!segments_touch(&a, &b, &options));
    let graph = SegmentGraph::build(&[a, b], &options);
    assert_eq!(graph.components(), vec![vec![0], vec![1]]);
}

#[test]
fn empty_mask_yields_nothing() {
    let result = detect_arrows_in_mask(&BinaryMask::new(64, 64), &ArrowOptions::default());
    assert!(result.segments.is_empty());
    assert!(result.arrows.is_empty());
}
