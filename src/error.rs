//! Crate-wide error type.
//!
//! The geometric engines never fail; errors only come from the edges of the
//! system: reading and writing files, decoding rasters, parsing configs and
//! the injected detector/recognizer collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by I/O, configuration, collaborators and the batch driver.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// Reading or writing a file failed.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The raster could not be opened or decoded.
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The raster could not be encoded or written.
    #[error("Failed to save image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// A JSON document on disk could not be parsed.
    #[error("Failed to parse JSON {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be serialized to JSON.
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    /// An external detector or recognizer reported a failure.
    #[error("{stage} collaborator failed: {message}")]
    Collaborator {
        stage: &'static str,
        message: String,
    },
    /// Invalid command line usage or inconsistent configuration.
    #[error("{0}")]
    Usage(String),
}

impl DiagramError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn collaborator(stage: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            stage,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DiagramError>;
