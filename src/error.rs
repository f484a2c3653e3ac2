//! Error taxonomy and exit-code mapping.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while parsing, validating, or loading buffers for the input
/// document.
///
/// The kind names match what the tool prints on exit code 2. `OutOfMemory`
/// is part of the reported taxonomy for compatibility; allocation failure
/// in this process aborts rather than unwinding, so it is never produced by
/// the loader itself.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found")]
    FileNotFound,
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("invalid glTF: {0}")]
    InvalidDocument(String),
    #[error("out of memory")]
    OutOfMemory,
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<gltf::Error> for LoadError {
    fn from(err: gltf::Error) -> Self {
        match err {
            gltf::Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                LoadError::FileNotFound
            }
            gltf::Error::Io(e) => LoadError::Io(e),
            e @ gltf::Error::Deserialize(_) => LoadError::InvalidJson(e.to_string()),
            e @ (gltf::Error::Validation(_)
            | gltf::Error::MissingBlob
            | gltf::Error::BufferLength { .. }) => LoadError::InvalidDocument(e.to_string()),
            e => LoadError::Unknown(e.to_string()),
        }
    }
}

/// Failure in a processing stage.
///
/// Extraction is best-effort and cannot fail; this is the failure channel
/// for the downstream stages that fill the JSON and binary chunks.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProcessError(pub String);

/// Failure while writing output containers.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unknown extension (expected .gltf or .glb)")]
    UnknownExtension,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Top-level conversion failure, tagged with the path it concerns.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error loading {}: {}", .path.display(), .source)]
    Load { path: PathBuf, source: LoadError },
    #[error("error processing {}: {}", .path.display(), .source)]
    Process { path: PathBuf, source: ProcessError },
    #[error("error saving {}: {}", .path.display(), .source)]
    Output { path: PathBuf, source: OutputError },
}

impl Error {
    /// Process exit code for this failure (load 2, process 3, output 4).
    /// Usage errors exit 1 before a conversion starts.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Load { .. } => 2,
            Error::Process { .. } => 3,
            Error::Output { .. } => 4,
        }
    }
}
