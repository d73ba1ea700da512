use super::correct::correct_confusions;
use super::options::LabelMergeOptions;
use super::types::{MergedLabel, TextDetection};
use crate::types::BoxXyxy;
use log::debug;
use std::collections::VecDeque;
use std::time::Instant;

/// Label under construction: the running union box and text.
#[derive(Clone, Debug)]
struct Accumulator {
    bbox: BoxXyxy,
    text: String,
    sources: Vec<usize>,
    confidence: f32,
}

impl Accumulator {
    fn absorb(&mut self, other: Accumulator) {
        let joined = format!("{} {}", self.text, other.text);
        self.text = correct_confusions(&joined).into_owned();
        self.bbox = self.bbox.union(&other.bbox);
        self.sources.extend(other.sources);
        self.confidence = self.confidence.min(other.confidence);
    }

    fn finish(self) -> MergedLabel {
        MergedLabel {
            txt: self.text.trim().to_string(),
            cnt: self.bbox.center(),
            wh: self.bbox.size(),
            bbox: self.bbox,
            sources: self.sources,
            confidence: self.confidence,
        }
    }
}

/// `other` continues the line of `current` to the right.
pub fn joins_horizontally(current: &BoxXyxy, other: &BoxXyxy, options: &LabelMergeOptions) -> bool {
    let gap = other.x1 - current.x2;
    (current.y1 - other.y1).abs() < options.same_line_tolerance
        && options.min_horizontal_gap < gap
        && gap < options.max_horizontal_gap
}

/// `other` is a wrapped line stacked under `current`.
pub fn joins_vertically(current: &BoxXyxy, other: &BoxXyxy, options: &LabelMergeOptions) -> bool {
    let overlap = current.x2.min(other.x2) - current.x1.max(other.x1);
    let narrower = current.width().min(other.width());
    let gap = other.y1 - current.y2;
    overlap as f32 > narrower as f32 * options.min_overlap_ratio
        && 0 <= gap
        && gap < options.max_vertical_gap
}

/// Groups raw text fragments into labels.
#[derive(Clone, Debug, Default)]
pub struct LabelMerger {
    options: LabelMergeOptions,
}

impl LabelMerger {
    pub fn new(options: LabelMergeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LabelMergeOptions {
        &self.options
    }

    fn joins(&self, current: &BoxXyxy, other: &BoxXyxy) -> bool {
        joins_horizontally(current, other, &self.options)
            || joins_vertically(current, other, &self.options)
    }

    /// One reading-order sweep over `pending`.
    ///
    /// Each accumulator keeps absorbing the first remaining entry it joins
    /// until none does, so a grown box can pick up fragments it missed
    /// earlier. Returns the survivors and whether anything was absorbed.
    fn sweep(&self, mut pending: Vec<Accumulator>) -> (Vec<Accumulator>, bool) {
        pending.sort_by_key(|acc| (acc.bbox.y1, acc.bbox.x1));
        let mut pending = VecDeque::from(pending);
        let mut done = Vec::with_capacity(pending.len());
        let mut absorbed = false;
        while let Some(mut current) = pending.pop_front() {
            while let Some(i) = pending
                .iter()
                .position(|other| self.joins(&current.bbox, &other.bbox))
            {
                if let Some(other) = pending.remove(i) {
                    current.absorb(other);
                    absorbed = true;
                }
            }
            done.push(current);
        }
        (done, absorbed)
    }

    /// Merge `detections` into labels.
    ///
    /// Fragments are corrected, sorted into reading order by their top-left
    /// corner and swept front to back. A label finished early in a sweep may
    /// join one that grew later, so sweeps repeat over the accumulators until
    /// one absorbs nothing. Merging the output again yields the same labels.
    pub fn merge(&self, detections: &[TextDetection]) -> Vec<MergedLabel> {
        let start = Instant::now();
        let mut pending: Vec<Accumulator> = detections
            .iter()
            .enumerate()
            .filter_map(|(index, det)| {
                if det.bbox.is_degenerate() {
                    return None;
                }
                let text = correct_confusions(&det.text);
                if text.trim().is_empty() {
                    return None;
                }
                Some(Accumulator {
                    bbox: det.bbox,
                    text: text.into_owned(),
                    sources: vec![index],
                    confidence: det.confidence,
                })
            })
            .collect();
        let dropped = detections.len() - pending.len();

        let mut sweeps = 0usize;
        loop {
            sweeps += 1;
            let (next, absorbed) = self.sweep(pending);
            pending = next;
            if !absorbed {
                break;
            }
        }
        let labels: Vec<MergedLabel> = pending.into_iter().map(Accumulator::finish).collect();

        debug!(
            "LabelMerger: fragments={} dropped={} labels={} sweeps={} elapsed_ms={:.3}",
            detections.len(),
            dropped,
            labels.len(),
            sweeps,
            start.elapsed().as_secs_f64() * 1000.0
        );
        labels
    }
}
