use crate::types::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis along which a stroke runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

/// Identifier of a stroke within one image, in extraction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

/// Straight horizontal or vertical stroke extracted from the ink mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeSegment {
    pub id: SegmentId,
    pub rect: Rect,
    /// Midpoints of the two short edges of `rect`.
    pub ends: [Point; 2],
    #[serde(rename = "dir")]
    pub orientation: Orientation,
}

impl StrokeSegment {
    /// Build a stroke from its bounding rectangle, or `None` when the extent
    /// along `orientation` is below `min_length`.
    pub fn from_rect(
        id: SegmentId,
        rect: Rect,
        orientation: Orientation,
        min_length: i32,
    ) -> Option<Self> {
        let extent = match orientation {
            Orientation::Horizontal => rect.w,
            Orientation::Vertical => rect.h,
        };
        if extent < min_length {
            return None;
        }
        let ends = match orientation {
            Orientation::Horizontal => {
                let y = rect.y + rect.h / 2;
                [[rect.x, y], [rect.x + rect.w, y]]
            }
            Orientation::Vertical => {
                let x = rect.x + rect.w / 2;
                [[x, rect.y], [x, rect.y + rect.h]]
            }
        };
        Some(Self {
            id,
            rect,
            ends,
            orientation,
        })
    }

    /// Length along the stroke axis.
    pub fn extent(&self) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.rect.w,
            Orientation::Vertical => self.rect.h,
        }
    }
}

/// Connected component of strokes with its free ends resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArrowGroup {
    /// Member strokes in traversal order.
    pub members: Vec<SegmentId>,
    /// Endpoints not absorbed by another member.
    pub external: Vec<Point>,
    pub tip: Option<Point>,
    pub starts: Vec<Point>,
}

impl ArrowGroup {
    /// Groups with no free end are closed shapes and are not emitted.
    pub fn is_emitted(&self) -> bool {
        self.tip.is_some() || !self.starts.is_empty()
    }
}

/// Arrow record handed to diagram assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    pub id: String,
    pub tip: Option<Point>,
    pub starts: Vec<Point>,
}
