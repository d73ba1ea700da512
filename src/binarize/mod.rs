//! Adaptive binarization of rendered diagrams.
//!
//! Each pixel is compared against a Gaussian-weighted mean of its
//! `block_size × block_size` neighbourhood. Pixels darker than that mean by at
//! least `c` grey levels become ink; everything else is background. Filled
//! regions wider than the block therefore keep only their outline, which is
//! what the stroke extractor and the arrowhead density test expect.
mod filters;

pub use filters::GaussianKernel;

use crate::image::{BinaryMask, ImageU8, ImageView, ImageViewMut};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Parameters of the adaptive threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOptions {
    /// Odd neighbourhood size in pixels.
    pub block_size: usize,
    /// Offset subtracted from the local mean.
    pub c: f32,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            block_size: 11,
            c: 2.0,
        }
    }
}

/// Inverted adaptive Gaussian threshold: dark strokes become ink (255).
pub fn adaptive_threshold(gray: &ImageU8<'_>, options: ThresholdOptions) -> BinaryMask {
    let start = Instant::now();
    let mut mask = BinaryMask::new(gray.w, gray.h);
    if gray.w == 0 || gray.h == 0 {
        return mask;
    }
    let kernel = GaussianKernel::for_size(options.block_size);
    let means = kernel.blur(gray);
    let delta = options.c.floor() as i32;

    for y in 0..gray.h {
        let src = gray.row(y);
        let mean_row = &means[y * gray.w..(y + 1) * gray.w];
        let dst = mask.row_mut(y);
        for x in 0..gray.w {
            let mean = mean_row[x].round().clamp(0.0, 255.0) as i32;
            if src[x] as i32 - mean <= -delta {
                dst[x] = crate::image::mask::INK;
            }
        }
    }
    debug!(
        "binarize::adaptive_threshold w={} h={} block={} ink={} elapsed_ms={:.3}",
        gray.w,
        gray.h,
        options.block_size,
        mask.count_nonzero(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: usize, h: usize) -> Vec<u8> {
        vec![255u8; w * h]
    }

    #[test]
    fn white_page_has_no_ink() {
        let data = canvas(40, 30);
        let mask = adaptive_threshold(&ImageU8::new(40, 30, &data), ThresholdOptions::default());
        assert_eq!(mask.count_nonzero(), 0);
    }

    #[test]
    fn thin_dark_line_becomes_ink() {
        let (w, h) = (60usize, 40usize);
        let mut data = canvas(w, h);
        for x in 10..50 {
            data[20 * w + x] = 0;
            data[21 * w + x] = 0;
        }
        let mask = adaptive_threshold(&ImageU8::new(w, h, &data), ThresholdOptions::default());
        for x in 10..50 {
            assert!(mask.get(x, 20) && mask.get(x, 21), "x={x}");
        }
        assert!(!mask.get(30, 18));
        assert!(!mask.get(5, 20));
    }
}
