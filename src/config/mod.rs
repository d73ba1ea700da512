//! JSON configs of the command line tools.
//!
//! Each tool takes one argument, the path of its config. Omitted tuning
//! fields fall back to the defaults of the corresponding option struct.

pub mod arrows;
pub mod batch;
pub mod labels;

use crate::error::Result;
use crate::image::io::read_json_file;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a tool config from `path`.
pub fn load_json_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    read_json_file(path)
}
