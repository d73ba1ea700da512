use super::*;
use crate::types::BoxXyxy;

fn det(b: [i32; 4], text: &str) -> TextDetection {
    TextDetection::new(BoxXyxy::from(b), text, 0.9)
}

fn merge(detections: &[TextDetection]) -> Vec<MergedLabel> {
    let _ = env_logger::builder().is_test(true).try_init();
    merge_labels(detections, &LabelMergeOptions::default())
}

#[test]
fn same_line_fragments_merge() {
    let labels = merge(&[det([10, 10, 40, 22], "Order"), det([42, 11, 70, 23], "Created")]);
    assert_eq!(labels.len(), 1);
    let label = &labels[0];
    assert_eq!(label.txt, "Order Created");
    assert_eq!(label.bbox, BoxXyxy::new(10, 10, 70, 23));
    assert_eq!(label.cnt, [40, 16]);
    assert_eq!(label.wh, [60, 13]);
}

#[test]
fn stacked_lines_merge() {
    let labels = merge(&[det([10, 10, 80, 22], "Payment"), det([15, 27, 75, 39], "received")]);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].txt, "Payment received");
    assert_eq!(labels[0].bbox, BoxXyxy::new(10, 10, 80, 39));
    assert_eq!(labels[0].cnt, [45, 24]);
    assert_eq!(labels[0].wh, [70, 29]);
}

#[test]
fn short_fragment_is_corrected() {
    let labels = merge(&[det([10, 10, 30, 22], "1O")]);
    assert_eq!(labels[0].txt, "10");
}

#[test]
fn joined_text_is_corrected_again() {
    let labels = merge(&[det([10, 10, 40, 22], "Step"), det([45, 10, 55, 22], "1")]);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].txt, "5tep 1");
}

#[test]
fn grown_box_picks_up_skipped_fragment() {
    // "amount" sits too far from "Total" until "due" extends the box.
    let labels = merge(&[
        det([10, 10, 40, 20], "Total"),
        det([45, 15, 90, 25], "due"),
        det([95, 11, 130, 21], "amount"),
    ]);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].txt, "Total due amount");
    assert_eq!(labels[0].sources, vec![0, 1, 2]);
    assert_eq!(labels[0].bbox, BoxXyxy::new(10, 10, 130, 25));
}

#[test]
fn label_closed_early_joins_one_grown_later() {
    // "Alpha" is too far from "Bravo" until "Charlie" wraps under it and
    // pulls the box left.
    let input = [
        det([100, 100, 140, 110], "Alpha"),
        det([200, 105, 260, 115], "Bravo"),
        det([175, 120, 240, 130], "Charlie"),
    ];
    let labels = merge(&input);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].txt, "Alpha Bravo Charlie");
    assert_eq!(labels[0].bbox, BoxXyxy::new(100, 100, 260, 130));
    assert_eq!(labels[0].sources, vec![0, 1, 2]);

    let again: Vec<TextDetection> = labels.iter().map(MergedLabel::to_detection).collect();
    let second = merge(&again);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].txt, labels[0].txt);
    assert_eq!(second[0].bbox, labels[0].bbox);
}

#[test]
fn wide_gap_keeps_fragments_apart() {
    let labels = merge(&[det([10, 10, 40, 22], "Order"), det([95, 10, 130, 22], "Created")]);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].txt, "Order");
    assert_eq!(labels[1].txt, "Created");
}

#[test]
fn predicates_are_directional() {
    let opts = LabelMergeOptions::default();
    let left = BoxXyxy::new(40, 10, 95, 22);
    let right = BoxXyxy::new(100, 10, 140, 22);
    assert!(joins_horizontally(&left, &right, &opts));
    assert!(!joins_horizontally(&right, &left, &opts));

    let upper = BoxXyxy::new(10, 10, 80, 22);
    let lower = BoxXyxy::new(15, 27, 75, 39);
    assert!(joins_vertically(&upper, &lower, &opts));
    assert!(!joins_vertically(&lower, &upper, &opts));
}

#[test]
fn empty_input_gives_no_labels() {
    assert!(merge(&[]).is_empty());
}

#[test]
fn malformed_fragments_are_dropped() {
    let labels = merge(&[
        det([10, 10, 40, 22], "   "),
        det([42, 11, 42, 23], "ghost"),
        det([60, 60, 100, 72], "Approve"),
    ]);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].txt, "Approve");
    assert_eq!(labels[0].sources, vec![2]);
}

#[test]
fn merging_is_idempotent() {
    let first = merge(&[
        det([10, 10, 40, 22], "Order"),
        det([42, 11, 70, 23], "Created"),
        det([200, 100, 270, 112], "Payment"),
        det([205, 117, 265, 129], "received"),
    ]);
    assert_eq!(first.len(), 2);

    let again: Vec<TextDetection> = first.iter().map(MergedLabel::to_detection).collect();
    let second = merge(&again);
    let key = |l: &MergedLabel| (l.txt.clone(), l.cnt, l.wh);
    assert_eq!(
        first.iter().map(key).collect::<Vec<_>>(),
        second.iter().map(key).collect::<Vec<_>>()
    );
}

#[test]
fn every_fragment_lands_in_one_label() {
    let input = vec![
        det([10, 10, 40, 22], "Order"),
        det([300, 300, 340, 312], "Reject"),
        det([42, 11, 70, 23], "Created"),
        det([15, 200, 60, 212], "Done"),
        det([10, 27, 60, 39], "today"),
    ];
    let labels = merge(&input);
    let mut sources: Vec<usize> = labels.iter().flat_map(|l| l.sources.clone()).collect();
    sources.sort_unstable();
    assert_eq!(sources, vec![0, 1, 2, 3, 4]);

    for label in &labels {
        let union = label
            .sources
            .iter()
            .map(|&i| input[i].bbox)
            .reduce(|a, b| a.union(&b))
            .unwrap();
        assert_eq!(label.bbox, union);
    }
}

#[test]
fn labels_serialize_compactly() {
    let labels = merge(&[det([10, 10, 40, 22], "Order")]);
    let json = serde_json::to_value(&labels[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"txt": "Order", "cnt": [25, 16], "wh": [30, 12]})
    );
}
