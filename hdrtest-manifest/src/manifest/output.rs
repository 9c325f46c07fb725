use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use super::headers::unspanned;

/// `[output]` table: where the generated test source goes and what its
/// disclaimer says.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension of the generated source file, without the dot
    pub extension: Spanned<String>,

    /// Output directory, relative to the module binary path
    pub test_dir: Spanned<String>,

    /// Tool named in the disclaimer and in banned-header comments
    pub generator_name: String,

    /// How to regenerate the file; omitted from the disclaimer when empty
    pub regenerate_hint: String,

    /// Project named in the disclaimer
    pub project: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: unspanned("cxx"),
            test_dir: unspanned("test"),
            generator_name: "hdrtest".to_string(),
            regenerate_hint: "To regenerate, build the ITKHeaderTests target.".to_string(),
            project: "Insight".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn extension(&self) -> &str {
        self.extension.get_ref()
    }

    pub fn test_dir(&self) -> &Path {
        Path::new(self.test_dir.get_ref())
    }
}
