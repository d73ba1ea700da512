use super::{NodeDetector, SourceImage, TextRecognizer};
use crate::error::Result;
use crate::image::io::read_json_file;
use crate::labels::TextDetection;
use crate::nodes::NodeDetection;
use crate::types::BoxXyxy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Parsed sidecars kept around; one per image being parsed concurrently.
const CACHE_SLOTS: usize = 64;

/// Precomputed detections for one image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidecarDocument {
    pub nodes: Vec<NodeDetection>,
    pub text: Vec<TextDetection>,
}

/// Detector and recognizer backed by `<dir>/<image stem>.json` files.
///
/// Lets the parser run on detections produced offline by any model. A
/// missing sidecar means the image has no detections.
///
/// Each sidecar is read and parsed once; the detector and every recognizer
/// call for the same image share that parse. Edits to a sidecar made after it
/// was first loaded are not seen.
#[derive(Debug)]
pub struct SidecarAnnotations {
    dir: PathBuf,
    cache: Mutex<VecDeque<(PathBuf, Arc<SidecarDocument>)>>,
}

impl SidecarAnnotations {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(VecDeque::with_capacity(CACHE_SLOTS)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sidecar_path(&self, image: &SourceImage) -> PathBuf {
        self.dir.join(format!("{}.json", image.stem()))
    }

    /// Sidecar of `image`, or an empty document if there is none.
    ///
    /// The file is read on first use only. Parse errors are not cached.
    pub fn load(&self, image: &SourceImage) -> Result<Arc<SidecarDocument>> {
        let path = self.sidecar_path(image);
        if let Some(doc) = self.cached(&path) {
            return Ok(doc);
        }

        let doc = if path.exists() {
            debug!("SidecarAnnotations: reading {}", path.display());
            Arc::new(read_json_file::<SidecarDocument>(&path)?)
        } else {
            debug!("SidecarAnnotations: no sidecar at {}", path.display());
            Arc::new(SidecarDocument::default())
        };

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if cache.len() == CACHE_SLOTS {
            cache.pop_front();
        }
        cache.push_back((path, Arc::clone(&doc)));
        Ok(doc)
    }

    fn cached(&self, path: &Path) -> Option<Arc<SidecarDocument>> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, doc)| Arc::clone(doc))
    }
}

impl NodeDetector for SidecarAnnotations {
    fn detect(&self, image: &SourceImage) -> Result<Vec<NodeDetection>> {
        Ok(self.load(image)?.nodes.clone())
    }
}

impl TextRecognizer for SidecarAnnotations {
    fn recognize(&self, image: &SourceImage, region: BoxXyxy) -> Result<Vec<TextDetection>> {
        let doc = self.load(image)?;
        Ok(doc
            .text
            .iter()
            .filter(|t| region.contains(t.bbox.center()))
            .cloned()
            .collect())
    }
}
