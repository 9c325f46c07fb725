//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from generating one header test.
#[derive(Debug)]
pub struct GenerateReport {
    /// Module name from the command line.
    pub module_name: String,
    /// Requested page, starting at 1.
    pub page_number: usize,
    /// Number of pages the module's headers fill.
    pub page_count: usize,
    /// Headers found in the include directory.
    pub total_headers: usize,
    /// Headers on this page.
    pub page_headers: usize,
    /// Headers on this page emitted as comments.
    pub banned: usize,
    /// Headers on this page replaced by their variant.
    pub variants: usize,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the file was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Destination path.
    pub path: PathBuf,
    /// Whether an earlier file was replaced.
    pub replaced: bool,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Where the file would be written.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let verb = if written.replaced { "Updated" } else { "Generated" };
        out.key_value(verb, &written.path.display().to_string());
        self.render_summary(out);
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.divider(&preview.path.display().to_string());
        out.preformatted(&preview.content);
        out.divider("Summary");
        self.render_summary(out);
    }

    fn render_summary(&self, out: &mut dyn Output) {
        out.key_value_indented("module", &self.module_name);
        out.key_value_indented(
            "page",
            &format!("{} of {}", self.page_number, self.page_count),
        );
        out.key_value_indented(
            "headers",
            &format!("{} of {}", self.page_headers, self.total_headers),
        );
        if self.banned > 0 {
            out.key_value_indented("banned", &self.banned.to_string());
        }
        if self.variants > 0 {
            out.key_value_indented("variants", &self.variants.to_string());
        }
    }
}
