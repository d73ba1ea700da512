//! Output document assembled for one image.
use crate::arrows::Arrow;
use crate::labels::MergedLabel;
use crate::nodes::NodeRecord;
use serde::Serialize;

/// `{source_file, nodes, labels, arrows}` record written per image.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DiagramDocument {
    pub source_file: String,
    pub nodes: Vec<NodeRecord>,
    pub labels: Vec<MergedLabel>,
    pub arrows: Vec<Arrow>,
}

impl DiagramDocument {
    /// Document with no primitives, used when an image cannot be parsed.
    pub fn empty(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.labels.is_empty() && self.arrows.is_empty()
    }
}
