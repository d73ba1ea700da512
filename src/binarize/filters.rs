use crate::image::{ImageU8, ImageView};

/// Normalised binomial taps used for the small odd kernel sizes.
const GAUSSIAN_1TAP: [f32; 1] = [1.0];
const GAUSSIAN_3TAP: [f32; 3] = [0.25, 0.5, 0.25];
const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const GAUSSIAN_7TAP: [f32; 7] = [
    0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
];

/// Symmetric 1D Gaussian kernel applied separably along rows and columns.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Kernel for an odd window of `size` taps with the sigma implied by the
    /// size (`0.3·((size − 1)/2 − 1) + 0.8`). Sizes up to 7 use the fixed
    /// binomial tables.
    pub fn for_size(size: usize) -> Self {
        let size = if size % 2 == 0 { size + 1 } else { size.max(1) };
        let taps = match size {
            1 => GAUSSIAN_1TAP.to_vec(),
            3 => GAUSSIAN_3TAP.to_vec(),
            5 => GAUSSIAN_5TAP.to_vec(),
            7 => GAUSSIAN_7TAP.to_vec(),
            _ => {
                let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
                let radius = (size / 2) as f32;
                let scale = -0.5 / (sigma * sigma);
                let raw: Vec<f32> = (0..size)
                    .map(|i| {
                        let d = i as f32 - radius;
                        (scale * d * d).exp()
                    })
                    .collect();
                let sum: f32 = raw.iter().sum();
                raw.into_iter().map(|v| v / sum).collect()
            }
        };
        Self { taps }
    }

    #[inline]
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }

    /// Blur `src` with replicated borders, returning a row-major f32 buffer of
    /// the same size.
    pub fn blur(&self, src: &ImageU8<'_>) -> Vec<f32> {
        let (w, h) = (src.w, src.h);
        if w == 0 || h == 0 {
            return Vec::new();
        }
        let taps = self.taps();
        let radius = self.radius() as isize;

        let mut horiz = vec![0.0f32; w * h];
        for y in 0..h {
            let row = src.row(y);
            let out = &mut horiz[y * w..(y + 1) * w];
            for (x, dst) in out.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (k, &tap) in taps.iter().enumerate() {
                    let sx = clamp_index(x as isize + k as isize - radius, w);
                    acc += tap * row[sx] as f32;
                }
                *dst = acc;
            }
        }

        let mut out = vec![0.0f32; w * h];
        for y in 0..h {
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, h);
                let src_row = &horiz[sy * w..(sy + 1) * w];
                let dst_row = &mut out[y * w..(y + 1) * w];
                for (d, &s) in dst_row.iter_mut().zip(src_row) {
                    *d += tap * s;
                }
            }
        }
        out
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
