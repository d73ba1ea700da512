//! Interfaces to the external node detector and text recognizer.
//!
//! Both are created once before a batch and shared by reference across
//! worker threads, hence the `Send + Sync` bounds.

mod sidecar;

pub use sidecar::{SidecarAnnotations, SidecarDocument};

use crate::error::Result;
use crate::labels::TextDetection;
use crate::nodes::NodeDetection;
use crate::types::BoxXyxy;
use image::RgbImage;

/// Raster being parsed together with its file name.
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// File name recorded as `source_file` in the output document.
    pub name: String,
    pub pixels: RgbImage,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// File name without its extension.
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(stem, _)| stem)
    }

    pub fn full_region(&self) -> BoxXyxy {
        BoxXyxy::full_image(self.width(), self.height())
    }
}

/// Shape detector returning classified node boxes in image coordinates.
pub trait NodeDetector: Send + Sync {
    fn detect(&self, image: &SourceImage) -> Result<Vec<NodeDetection>>;
}

/// Text recognizer returning fragments found inside `region`.
///
/// `image` may differ from the raster the detector saw (node boxes are
/// whitened before the full-image pass). Returned boxes are in image
/// coordinates.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, image: &SourceImage, region: BoxXyxy) -> Result<Vec<TextDetection>>;
}

impl<T: NodeDetector + ?Sized> NodeDetector for &T {
    fn detect(&self, image: &SourceImage) -> Result<Vec<NodeDetection>> {
        (**self).detect(image)
    }
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for &T {
    fn recognize(&self, image: &SourceImage, region: BoxXyxy) -> Result<Vec<TextDetection>> {
        (**self).recognize(image, region)
    }
}
