//! Header test generation for hdrtest.
//!
//! A header test is a throwaway source file that includes one page of a
//! module's public headers and defines an empty `main`. Compiling it proves
//! each header is self-contained and that the module declares every
//! dependency its headers need.
//!
//! # Module Organization
//!
//! - [`headers`] - Enumeration, pagination and include resolution
//! - [`files`] - The generated test source
//! - [`builder`] - Indented code building
//! - [`Generator`] - Ties the steps together for one invocation

pub mod builder;
mod error;
pub mod files;
mod generator;
pub mod headers;

pub use error::{Error, Result};
pub use generator::{GenerateResult, Generator, HeaderTestPlan, HeaderTestRequest, PreviewFile};
