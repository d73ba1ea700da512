//! Binary morphology on stroke masks, backed by `imageproc::morphology`.
//!
//! The stroke extractor needs two operations:
//! - an opening with a one-pixel-thick line element, which keeps only ink runs
//!   at least as long as the element along one axis;
//! - a small square dilation that closes 1–3 px gaps left by anti-aliasing or
//!   stroke crossings.
//!
//! For a line element of length `n` the window at position `i` covers
//! `[i − n/2, i − n/2 + n)`. Pixels outside the raster count as ink for
//! erosion and as background for dilation, so strokes touching the border are
//! not eaten away.
use crate::arrows::Orientation;
use crate::image::mask::INK;
use crate::image::BinaryMask;
use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, grayscale_open, Mask};

/// Longest line element `imageproc` accepts (side < 512, centre fits a `u8`).
pub const MAX_LINE_LENGTH: usize = 511;

/// Line element of `length` pixels anchored at `length / 2`.
fn line_mask(orientation: Orientation, length: usize) -> Mask {
    let length = length.min(MAX_LINE_LENGTH);
    let anchor = u8::try_from(length / 2).unwrap_or(u8::MAX);
    let len = length as u32;
    match orientation {
        Orientation::Horizontal => {
            Mask::from_image(&GrayImage::from_pixel(len, 1, Luma([INK])), anchor, 0)
        }
        Orientation::Vertical => {
            Mask::from_image(&GrayImage::from_pixel(1, len, Luma([INK])), 0, anchor)
        }
    }
}

/// Opening (erode, then dilate) with a line element of `length` pixels.
///
/// Lengths above [`MAX_LINE_LENGTH`] are clamped.
pub fn open_line(mask: &BinaryMask, orientation: Orientation, length: usize) -> BinaryMask {
    if length <= 1 {
        return mask.clone();
    }
    let element = line_mask(orientation, length);
    BinaryMask::from_gray_image(&grayscale_open(&mask.to_gray_image(), &element))
}

/// Dilation with a `(2·radius + 1)²` square element.
pub fn dilate_rect(mask: &BinaryMask, radius: usize) -> BinaryMask {
    if radius == 0 {
        return mask.clone();
    }
    let k = u8::try_from(radius).unwrap_or(u8::MAX);
    BinaryMask::from_gray_image(&dilate(&mask.to_gray_image(), Norm::LInf, k))
}
