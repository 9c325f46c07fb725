//! Report data structures for commands.
//!
//! Operations collect what happened into a report, then commands render it
//! to an Output target.

mod check;
mod generate;
mod output;
mod pages;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
pub use pages::{PageInfo, PagesReport};

#[cfg(test)]
pub(crate) use output::RecordingOutput;
