//! Pages operation - show how headers split into generated files.

use std::{num::NonZeroUsize, path::Path};

use eyre::{Context, Result};
use hdrtest_codegen::headers::{HeaderSet, pages as all_pages};
use hdrtest_manifest::Manifest;

use crate::reports::{PageInfo, PagesReport};

/// Execute the pages operation.
pub fn pages(
    manifest: &Manifest,
    module_source: &Path,
    page_size: NonZeroUsize,
) -> Result<PagesReport> {
    let headers = HeaderSet::enumerate(module_source, &manifest.headers)
        .wrap_err_with(|| format!("Failed to list headers of {}", module_source.display()))?;

    let pages = all_pages(headers.len(), page_size)
        .map(|page| {
            let names = headers.page(&page);
            PageInfo {
                number: page.number(),
                start: page.start(),
                end: page.end(),
                first: names.first().cloned().unwrap_or_default(),
                last: names.last().cloned().unwrap_or_default(),
            }
        })
        .collect();

    Ok(PagesReport {
        include_dir: headers.include_dir().to_path_buf(),
        total_headers: headers.len(),
        page_size: page_size.get(),
        pages,
    })
}
