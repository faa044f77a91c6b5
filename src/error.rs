// src/error.rs

//! Crate-level error type
//!
//! Each module reports its own failures through a dedicated error enum;
//! this type wraps them together with file I/O errors so that the
//! end-to-end operations can use a single `Result`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::exports::ExportError;
use crate::generated::SpliceError;
use crate::manifest::ManifestError;
use crate::sources::SourcesError;
use crate::testdata::TestDataError;

/// Errors produced by mesonport operations
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Sources(#[from] SourcesError),

    #[error(transparent)]
    Splice(#[from] SpliceError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    TestData(#[from] TestDataError),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for mesonport operations
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Read a file that may legitimately be absent
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}
