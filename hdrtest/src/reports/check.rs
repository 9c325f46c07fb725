//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Settings a valid configuration file resolves to.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub header_extension: String,
    /// `None` when variant substitution is disabled.
    pub variant_extension: Option<String>,
    pub order: String,
    pub include_dir: PathBuf,
    pub output_extension: String,
    pub test_dir: PathBuf,
    /// Banned header names, sorted.
    pub banned: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section("Headers");
        out.key_value_indented("extension", &self.header_extension);
        out.key_value_indented(
            "variant extension",
            self.variant_extension.as_deref().unwrap_or("(disabled)"),
        );
        out.key_value_indented("order", &self.order);
        out.key_value_indented("include dir", &self.include_dir.display().to_string());

        out.section("Output");
        out.key_value_indented("extension", &self.output_extension);
        out.key_value_indented("test dir", &self.test_dir.display().to_string());

        out.section(&format!("Banned headers ({})", self.banned.len()));
        for name in &self.banned {
            out.list_item(name);
        }
    }
}
