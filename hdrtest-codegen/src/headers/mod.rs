//! Header discovery, pagination and include resolution.
//!
//! - [`HeaderSet`] - header file names found in a module's include directory
//! - [`Page`] - the slice of a header set covered by one generated test
//! - [`IncludeResolver`] - turns each header into an [`Include`] directive

mod enumerate;
mod partition;
mod resolve;

pub use enumerate::HeaderSet;
pub use partition::{Page, page_count, pages};
pub use resolve::{Include, IncludeResolver};
