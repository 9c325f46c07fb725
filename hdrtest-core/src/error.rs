use std::path::PathBuf;

use thiserror::Error;

/// Result type for file operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while putting a generated file on disk.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Path the failed operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::CreateDir { path, .. } | Error::Write { path, .. } => path,
        }
    }
}
