//! Core utilities and types for the hdrtest header test generator.
//!
//! This crate provides the generated-file abstraction and the file name
//! helpers shared by the rest of the workspace.

mod error;
mod file;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, WriteResult};
// File name utilities
pub use utils::{file_stem, has_extension, swap_extension};
