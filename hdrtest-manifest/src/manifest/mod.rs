//! Manifest types and parsing for hdrtest.toml files.

mod headers;
mod order;
mod output;
mod parse;
mod validate;

pub use headers::{HeadersConfig, MissingIncludeDir, VariantRule};
pub use order::HeaderOrder;
pub use output::OutputConfig;
use serde::Deserialize;

use crate::BannedHeaders;

/// Root manifest for hdrtest.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Header discovery and include resolution
    #[serde(default)]
    pub headers: HeadersConfig,

    /// Generated test source layout
    #[serde(default)]
    pub output: OutputConfig,
}

impl Manifest {
    /// The banned set to inject into include resolution.
    pub fn banned_headers(&self) -> BannedHeaders {
        self.headers.banned_headers()
    }
}
