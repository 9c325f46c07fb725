//! Core operations.
//!
//! This module contains the business logic for hdrtest commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod pages;

pub use check::check;
pub use generate::generate;
pub use pages::pages;
