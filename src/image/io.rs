//! I/O helpers for rasters and JSON.
//!
//! - `load_rgb_image`: decode a PNG/JPEG into an owned RGB buffer.
//! - `load_grayscale_image`: decode into an owned 8-bit gray buffer.
//! - `save_mask_png`: write a binary mask for inspection.
//! - `read_json_file` / `write_json_file`: serde round trips on disk.
use super::{BinaryMask, GrayImageU8};
use crate::error::{DiagramError, Result};
use image::RgbImage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| DiagramError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_rgb8())
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8> {
    let img = image::open(path).map_err(|source| DiagramError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(GrayImageU8::from_gray(img.into_luma8()))
}

/// Save a binary mask as a grayscale PNG.
pub fn save_mask_png(mask: &BinaryMask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    mask.to_gray_image()
        .save(path)
        .map_err(|source| DiagramError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse a JSON document from `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| DiagramError::io(path, e))?;
    serde_json::from_str(&data).map_err(|source| DiagramError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| DiagramError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DiagramError::io(parent, e))?;
        }
    }
    Ok(())
}
