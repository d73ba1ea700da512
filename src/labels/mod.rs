//! Label merging for recognized text fragments.
//!
//! Recognizers report text word by word or line by line. This module joins
//! fragments that belong to the same label:
//!
//! - each fragment is run through [`correct_confusions`], which maps letters
//!   commonly misread for digits (`O`→`0`, `l`→`1`, `S`→`5`, ...) when the
//!   text is short or already numeric;
//! - fragments are sorted by top edge, then left edge;
//! - an accumulator absorbs fragments that continue its line to the right
//!   ([`joins_horizontally`]) or sit directly below it as a wrapped line
//!   ([`joins_vertically`]), rescanning after every absorption;
//! - sweeps repeat until none absorbs anything, so a label closed early can
//!   still join one that grew after it;
//! - the finished label carries the trimmed text, the centre and the size of
//!   the union box.
//!
//! Fragments with empty text or zero-area boxes are dropped before merging.

mod correct;
mod merge;
mod options;
mod types;

pub use correct::{correct_confusions, looks_numeric};
pub use merge::{joins_horizontally, joins_vertically, LabelMerger};
pub use options::LabelMergeOptions;
pub use types::{MergedLabel, TextDetection};

/// Merge `detections` with the given thresholds.
pub fn merge_labels(detections: &[TextDetection], options: &LabelMergeOptions) -> Vec<MergedLabel> {
    LabelMerger::new(options.clone()).merge(detections)
}

#[cfg(test)]
mod tests;
