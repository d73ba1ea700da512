//! Raster containers used by the engines.
//!
//! - [`ImageU8`]: borrowed 8-bit grayscale view with an explicit stride.
//! - [`GrayImageU8`]: owned grayscale buffer, convertible from `image` types.
//! - [`BinaryMask`]: owned ink mask (0 = background, 255 = ink).
//!
//! Row access goes through [`ImageView`] / [`ImageViewMut`] so the filters in
//! `binarize` and `morphology` work on any of them.
pub mod io;
pub mod mask;
pub mod traits;
pub mod u8;

pub use self::mask::BinaryMask;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
