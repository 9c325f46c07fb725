use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use hdrtest_core::{GeneratedFile, WriteResult};
use hdrtest_manifest::Manifest;

use crate::{
    Result,
    files::HeaderTest,
    headers::{HeaderSet, IncludeResolver, Page, page_count},
};

/// Inputs of one generator invocation, as supplied by the build system.
#[derive(Debug, Clone)]
pub struct HeaderTestRequest {
    /// Module name, used as the output file name prefix
    pub module_name: String,
    /// Module source directory (contains the include directory)
    pub module_source: PathBuf,
    /// Module binary directory (receives the test directory)
    pub module_binary: PathBuf,
    /// Maximum number of headers per generated file
    pub page_size: NonZeroUsize,
    /// 1-based page to generate
    pub page_number: NonZeroUsize,
}

/// Everything decided before anything is written.
#[derive(Debug, Clone)]
pub struct HeaderTestPlan {
    /// Headers found in the module
    pub total_headers: usize,
    /// Pages needed to cover all headers
    pub page_count: usize,
    /// The page this invocation covers
    pub page: Page,
    /// The file to emit
    pub file: HeaderTest,
}

/// A generated file rendered without touching the disk
#[derive(Debug)]
pub struct PreviewFile {
    /// Destination path
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Result of writing a header test
#[derive(Debug)]
pub struct GenerateResult {
    /// Destination path
    pub path: PathBuf,
    /// Whether the file was created or replaced
    pub write: WriteResult,
    pub plan: HeaderTestPlan,
}

/// Header test generator: enumerate, partition, resolve, emit.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    request: &'a HeaderTestRequest,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest, request: &'a HeaderTestRequest) -> Self {
        Self { manifest, request }
    }

    /// Enumerate the module headers, pick the requested page and resolve
    /// its includes.
    pub fn plan(&self) -> Result<HeaderTestPlan> {
        let request = self.request;
        let headers = HeaderSet::enumerate(&request.module_source, &self.manifest.headers)?;
        let total = headers.len();
        let page = Page::new(total, request.page_size, request.page_number);
        let pages = page_count(total, request.page_size);

        if page.is_empty() {
            if page.number() > pages + 1 {
                tracing::warn!(
                    page = page.number(),
                    page_count = pages,
                    "page number is past the last page"
                );
            } else {
                tracing::debug!(page = page.number(), total, "page has no headers");
            }
        }

        let banned = self.manifest.banned_headers();
        let variant = self.manifest.headers.variant_rule();
        let resolver = IncludeResolver::new(headers.include_dir(), &banned, variant.as_ref());
        let includes = resolver.resolve_all(headers.page(&page));

        let file = HeaderTest::new(
            &request.module_name,
            page.number(),
            includes,
            &self.manifest.output,
        );

        Ok(HeaderTestPlan {
            total_headers: total,
            page_count: pages,
            page,
            file,
        })
    }

    /// Render the header test without writing it.
    pub fn preview(&self) -> Result<(PreviewFile, HeaderTestPlan)> {
        let plan = self.plan()?;
        let file = PreviewFile {
            path: self.output_path(&plan),
            content: plan.file.contents(),
        };
        Ok((file, plan))
    }

    /// Write the header test into the module binary directory.
    pub fn generate(&self) -> Result<GenerateResult> {
        let plan = self.plan()?;
        let path = self.output_path(&plan);
        let write = plan.file.write(&self.request.module_binary)?;

        tracing::info!(
            path = %path.display(),
            page = plan.page.number(),
            headers = plan.page.len(),
            "generated header test"
        );

        Ok(GenerateResult { path, write, plan })
    }

    fn output_path(&self, plan: &HeaderTestPlan) -> PathBuf {
        plan.file.path(self.module_binary())
    }

    fn module_binary(&self) -> &Path {
        &self.request.module_binary
    }
}
