//! Configuration for the hdrtest header test generator.
//!
//! A module's header test is driven by an optional `hdrtest.toml`. Every
//! table and key has a default, and the defaults reproduce the classic
//! layout: `include/*.h` headers, `.hxx` template variants, generated `.cxx`
//! sources under `test/`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod banned;
mod error;
mod manifest;

pub use banned::{BannedHeaders, DEFAULT_BANNED_HEADERS};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    HeaderOrder, HeadersConfig, Manifest, MissingIncludeDir, OutputConfig, VariantRule,
};
