//! Geometric primitives shared by the label and arrow engines.
//!
//! All coordinates are integer image pixels with the origin in the top-left
//! corner, x growing right and y growing down.
use serde::{Deserialize, Serialize};

/// Pixel coordinate `[x, y]`.
pub type Point = [i32; 2];

/// Euclidean distance between two pixel coordinates.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = (a[0] - b[0]) as f32;
    let dy = (a[1] - b[1]) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Axis-aligned box given by its corners, serialized as `[x1, y1, x2, y2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct BoxXyxy {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoxXyxy {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box covering a whole `width × height` raster.
    pub fn full_image(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// True when the box encloses no area.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoxXyxy) -> BoxXyxy {
        BoxXyxy {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Centre `[cx, cy]`, each component truncated toward zero.
    pub fn center(&self) -> Point {
        [(self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2]
    }

    /// Size `[w, h]`.
    pub fn size(&self) -> [i32; 2] {
        [self.width(), self.height()]
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        self.x1 <= p[0] && p[0] <= self.x2 && self.y1 <= p[1] && p[1] <= self.y2
    }

    /// Grow the box by `margin` pixels on every side.
    pub fn expanded(&self, margin: i32) -> BoxXyxy {
        BoxXyxy {
            x1: self.x1 - margin,
            y1: self.y1 - margin,
            x2: self.x2 + margin,
            y2: self.y2 + margin,
        }
    }

    /// Clamp both corners into `[0, max_x] × [0, max_y]`.
    pub fn clamped(&self, max_x: i32, max_y: i32) -> BoxXyxy {
        BoxXyxy {
            x1: self.x1.clamp(0, max_x.max(0)),
            y1: self.y1.clamp(0, max_y.max(0)),
            x2: self.x2.clamp(0, max_x.max(0)),
            y2: self.y2.clamp(0, max_y.max(0)),
        }
    }
}

impl From<[i32; 4]> for BoxXyxy {
    fn from(v: [i32; 4]) -> Self {
        BoxXyxy::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoxXyxy> for [i32; 4] {
    fn from(b: BoxXyxy) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// Bounding rectangle `(x, y, w, h)` as produced by contour tracing,
/// serialized as `[x, y, w, h]`.
///
/// `w` and `h` count pixels, so a single-pixel blob has `w = h = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True when `p` lies inside the rectangle grown by `margin` on each side.
    /// Both edges are inclusive and the far edge sits at `x + w` / `y + h`.
    pub fn contains_with_margin(&self, p: Point, margin: i32) -> bool {
        self.x - margin <= p[0]
            && p[0] <= self.x + self.w + margin
            && self.y - margin <= p[1]
            && p[1] <= self.y + self.h + margin
    }
}

impl From<[i32; 4]> for Rect {
    fn from(v: [i32; 4]) -> Self {
        Rect::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rect> for [i32; 4] {
    fn from(r: Rect) -> Self {
        [r.x, r.y, r.w, r.h]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both_boxes() {
        let a = BoxXyxy::new(10, 10, 40, 22);
        let b = BoxXyxy::new(42, 11, 70, 23);
        assert_eq!(a.union(&b), BoxXyxy::new(10, 10, 70, 23));
    }

    #[test]
    fn center_truncates_toward_zero() {
        let b = BoxXyxy::new(10, 10, 70, 23);
        assert_eq!(b.center(), [40, 16]);
        assert_eq!(b.size(), [60, 13]);
    }

    #[test]
    fn rect_margin_is_inclusive() {
        let r = Rect::new(10, 10, 20, 4);
        assert!(r.contains_with_margin([35, 19], 5));
        assert!(!r.contains_with_margin([36, 19], 5));
    }

    #[test]
    fn boxes_serialize_as_arrays() {
        let json = serde_json::to_string(&BoxXyxy::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        let rect: Rect = serde_json::from_str("[5,6,7,8]").unwrap();
        assert_eq!(rect, Rect::new(5, 6, 7, 8));
    }
}
