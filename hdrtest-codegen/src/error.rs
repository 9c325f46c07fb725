use std::path::PathBuf;

use thiserror::Error;

/// Result type for header test generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to list headers in '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("header directory '{path}' does not exist")]
    MissingIncludeDir { path: PathBuf },

    #[error(transparent)]
    Write(#[from] hdrtest_core::Error),
}
