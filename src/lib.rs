#![doc = include_str!("../README.md")]

// Geometric engines
pub mod arrows;
pub mod labels;

// Raster plumbing
pub mod binarize;
pub mod image;
pub mod morphology;
pub mod types;

// Diagram assembly
pub mod batch;
pub mod collaborators;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod nodes;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::arrows::{Arrow, ArrowEngine, ArrowOptions, ArrowResult};
pub use crate::document::DiagramDocument;
pub use crate::error::{DiagramError, Result};
pub use crate::labels::{LabelMergeOptions, LabelMerger, MergedLabel, TextDetection};
pub use crate::pipeline::{DiagramParser, ParserParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use diagram_parser::prelude::*;
///
/// # fn main() {
/// let (w, h) = (320usize, 240usize);
/// let gray = vec![255u8; w * h];
/// let img = ImageU8::new(w, h, &gray);
///
/// let result = ArrowEngine::new(ArrowOptions::default()).detect(&img);
/// println!("arrows={} elapsed_ms={:.3}", result.arrows.len(), result.elapsed_ms);
///
/// let labels = LabelMerger::default().merge(&[TextDetection::new(
///     BoxXyxy::new(10, 10, 40, 22),
///     "Order",
///     0.9,
/// )]);
/// println!("{}", labels[0].txt);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BinaryMask, ImageU8};
    pub use crate::types::{BoxXyxy, Point};
    pub use crate::{
        ArrowEngine, ArrowOptions, DiagramParser, LabelMerger, ParserParams, TextDetection,
    };
}
