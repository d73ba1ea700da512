//! Diagram assembly: nodes, labels and arrows for one raster.
//!
//! [`DiagramParser`] drives the injected collaborators and both geometric
//! engines in three stages:
//!
//! - Nodes: the detector proposes shapes; each accepted shape gets the text
//!   recognized inside its padded box, then the padded box is painted white.
//! - Labels: the recognizer runs over the whole whitened raster; fragments
//!   centred inside a node box are dropped, the rest are merged into labels
//!   and their boxes are painted white as well.
//! - Arrows: what remains is mostly connector strokes, which go through the
//!   arrow engine.
//!
//! ```no_run
//! use diagram_parser::collaborators::{SidecarAnnotations, SourceImage};
//! use diagram_parser::image::io::load_rgb_image;
//! use diagram_parser::{DiagramParser, ParserParams};
//! use std::path::Path;
//!
//! # fn main() -> diagram_parser::Result<()> {
//! let sidecar = SidecarAnnotations::new("detections");
//! let parser = DiagramParser::new(ParserParams::default(), &sidecar, &sidecar);
//! let pixels = load_rgb_image(Path::new("flow.png"))?;
//! let report = parser.parse(&SourceImage::new("flow.png", pixels))?;
//! println!("arrows={}", report.document.arrows.len());
//! # Ok(())
//! # }
//! ```

mod params;

pub use params::ParserParams;

use crate::arrows::ArrowEngine;
use crate::collaborators::{NodeDetector, SourceImage, TextRecognizer};
use crate::diagnostics::{elapsed_ms, ParseReport, StageCounts, TimingBreakdown};
use crate::document::DiagramDocument;
use crate::error::Result;
use crate::image::GrayImageU8;
use crate::labels::LabelMerger;
use crate::nodes::{clean_node_text, NodeRecord};
use crate::types::BoxXyxy;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect as FillRect;
use log::debug;
use std::time::Instant;

/// Paint the inclusive box `region` white, clipped to the raster.
pub fn whiten(pixels: &mut RgbImage, region: BoxXyxy) {
    let (w, h) = (pixels.width() as i32, pixels.height() as i32);
    if w == 0 || h == 0 {
        return;
    }
    let b = region.clamped(w - 1, h - 1);
    if b.x2 < b.x1 || b.y2 < b.y1 {
        return;
    }
    let rect = FillRect::at(b.x1, b.y1).of_size((b.width() + 1) as u32, (b.height() + 1) as u32);
    draw_filled_rect_mut(pixels, rect, Rgb([255, 255, 255]));
}

/// Parses rasters with one detector/recognizer pair.
pub struct DiagramParser<D, R> {
    params: ParserParams,
    detector: D,
    recognizer: R,
    merger: LabelMerger,
    arrows: ArrowEngine,
}

impl<D: NodeDetector, R: TextRecognizer> DiagramParser<D, R> {
    pub fn new(params: ParserParams, detector: D, recognizer: R) -> Self {
        let merger = LabelMerger::new(params.labels.clone());
        let arrows = ArrowEngine::new(params.arrows.clone());
        Self {
            params,
            detector,
            recognizer,
            merger,
            arrows,
        }
    }

    pub fn params(&self) -> &ParserParams {
        &self.params
    }

    /// Parse one raster into a document.
    ///
    /// Fails only when a collaborator fails; empty rasters give an empty
    /// document.
    pub fn parse(&self, image: &SourceImage) -> Result<ParseReport> {
        let total = Instant::now();
        let mut timing = TimingBreakdown::default();
        let mut counts = StageCounts::default();
        let (w, h) = (image.width() as i32, image.height() as i32);
        let mut cleaned = image.pixels.clone();

        let stage = Instant::now();
        let detections = self.detector.detect(image)?;
        counts.node_detections = detections.len();
        let mut nodes = Vec::new();
        let mut node_regions = Vec::new();
        for detection in detections
            .iter()
            .filter(|d| d.confidence >= self.params.node_confidence)
        {
            let region = detection
                .bbox
                .expanded(self.params.node_padding)
                .clamped(w - 1, h - 1);
            let fragments = self.recognizer.recognize(image, region)?;
            let raw: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
            let txt = clean_node_text(&raw.join(" "));
            nodes.push(NodeRecord::from_detection(nodes.len(), detection, txt));
            node_regions.push(region);
        }
        for region in &node_regions {
            whiten(&mut cleaned, *region);
        }
        counts.nodes = nodes.len();
        timing.record("nodes", stage);

        let stage = Instant::now();
        let cleaned_image = SourceImage::new(image.name.clone(), cleaned);
        let fragments = self
            .recognizer
            .recognize(&cleaned_image, cleaned_image.full_region())?;
        counts.text_fragments = fragments.len();
        let fragments: Vec<_> = fragments
            .into_iter()
            .filter(|f| {
                let c = f.bbox.center();
                !node_regions.iter().any(|r| r.contains(c))
            })
            .collect();
        counts.label_fragments = fragments.len();
        let labels = self.merger.merge(&fragments);
        let mut cleaned = cleaned_image.pixels;
        for fragment in &fragments {
            whiten(&mut cleaned, fragment.bbox);
        }
        counts.labels = labels.len();
        timing.record("labels", stage);

        let stage = Instant::now();
        let gray = GrayImageU8::from_rgb(&cleaned);
        let arrow_result = self.arrows.detect(&gray.as_view());
        counts.segments = arrow_result.segments.len();
        counts.groups = arrow_result.groups.len();
        counts.arrows = arrow_result.arrows.len();
        timing.record("arrows", stage);

        timing.total_ms = elapsed_ms(total);
        debug!(
            "DiagramParser::parse {}: nodes={} labels={} arrows={} total_ms={:.3}",
            image.name, counts.nodes, counts.labels, counts.arrows, timing.total_ms
        );

        Ok(ParseReport {
            document: DiagramDocument {
                source_file: image.name.clone(),
                nodes,
                labels,
                arrows: arrow_result.arrows,
            },
            counts,
            timing,
        })
    }
}
