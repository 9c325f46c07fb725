//! Pages command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// How a module's headers split into pages.
#[derive(Debug)]
pub struct PagesReport {
    /// Directory the headers were listed from.
    pub include_dir: PathBuf,
    /// Headers found.
    pub total_headers: usize,
    /// Maximum headers per page.
    pub page_size: usize,
    /// One entry per non-empty page.
    pub pages: Vec<PageInfo>,
}

/// A single page.
#[derive(Debug)]
pub struct PageInfo {
    pub number: usize,
    pub start: usize,
    pub end: usize,
    pub first: String,
    pub last: String,
}

impl PagesReport {
    /// Number of generator invocations needed to cover every header.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl Report for PagesReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Headers", &self.include_dir.display().to_string());
        out.key_value_indented("count", &self.total_headers.to_string());
        out.key_value_indented("per page", &self.page_size.to_string());
        out.newline();

        out.section(&format!("Pages ({})", self.page_count()));
        for page in &self.pages {
            let headers = if page.first == page.last {
                page.first.clone()
            } else {
                format!("{} .. {}", page.first, page.last)
            };
            out.numbered_item(
                page.number,
                &format!("[{}, {}) {}", page.start, page.end, headers),
            );
        }
    }
}
