//! Owned binary ink mask.
//!
//! Pixels hold `0` (background) or `255` (ink), matching the layout expected by
//! contour tracing. Window queries clip to the raster so callers can ask about
//! neighbourhoods that straddle the border.
use super::traits::{ImageView, ImageViewMut};
use super::u8::ImageU8;
use image::GrayImage;

pub const INK: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    pub w: usize,
    pub h: usize,
    data: Vec<u8>,
}

impl BinaryMask {
    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Treat every non-zero pixel of `gray` as ink.
    pub fn from_nonzero(gray: &ImageU8<'_>) -> Self {
        let mut mask = Self::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row(y);
            let dst = mask.row_mut(y);
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = if s != 0 { INK } else { 0 };
            }
        }
        mask
    }

    /// Treat every non-zero pixel of an `image` buffer as ink.
    pub fn from_gray_image(gray: &GrayImage) -> Self {
        let view = ImageU8::new(gray.width() as usize, gray.height() as usize, gray.as_raw());
        Self::from_nonzero(&view)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, ink: bool) {
        self.data[y * self.w + x] = if ink { INK } else { 0 };
    }

    /// Paint ink into the half-open window `[x0, x1) × [y0, y1)`, clipped.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let Some((x0, y0, x1, y1)) = self.clip(x0, y0, x1, y1) else {
            return;
        };
        for y in y0..y1 {
            self.row_mut(y)[x0..x1].fill(INK);
        }
    }

    /// Total number of ink pixels.
    pub fn count_nonzero(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }

    /// Ink pixels inside the half-open window `[x0, x1) × [y0, y1)`, clipped.
    pub fn count_in_window(&self, x0: i64, y0: i64, x1: i64, y1: i64) -> usize {
        let Some((x0, y0, x1, y1)) = self.clip(x0, y0, x1, y1) else {
            return 0;
        };
        (y0..y1)
            .map(|y| self.row(y)[x0..x1].iter().filter(|&&v| v != 0).count())
            .sum()
    }

    /// Copy into an `image` buffer for contour tracing or saving.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.w as u32, self.h as u32, |x, y| {
            image::Luma([self.data[y as usize * self.w + x as usize]])
        })
    }

    fn clip(&self, x0: i64, y0: i64, x1: i64, y1: i64) -> Option<(usize, usize, usize, usize)> {
        let x0 = x0.max(0) as usize;
        let y0 = y0.max(0) as usize;
        let x1 = x1.clamp(0, self.w as i64) as usize;
        let y1 = y1.clamp(0, self.h as i64) as usize;
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
