use std::path::Path;

use hdrtest_core::swap_extension;
use serde::{Deserialize, Serialize};
use toml::Spanned;

use super::HeaderOrder;
use crate::BannedHeaders;

/// `[headers]` table: which files are headers and how they are included.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadersConfig {
    /// Declaration header extension, without the dot
    pub extension: Spanned<String>,

    /// Implementation-template extension preferred when a sibling exists.
    /// An empty string disables variant substitution.
    pub variant_extension: Spanned<String>,

    /// Ordering applied before pagination
    pub order: HeaderOrder,

    /// Header directory, relative to the module source path
    pub include_dir: Spanned<String>,

    /// Behavior when the header directory does not exist
    pub missing_include_dir: MissingIncludeDir,

    /// Replaces the default banned set when present
    pub banned: Option<Vec<Spanned<String>>>,

    /// Added on top of `banned` (or the default set)
    pub extra_banned: Vec<Spanned<String>>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            extension: unspanned("h"),
            variant_extension: unspanned("hxx"),
            order: HeaderOrder::default(),
            include_dir: unspanned("include"),
            missing_include_dir: MissingIncludeDir::default(),
            banned: None,
            extra_banned: Vec::new(),
        }
    }
}

pub(super) fn unspanned(value: &str) -> Spanned<String> {
    Spanned::new(0..0, value.to_string())
}

impl HeadersConfig {
    pub fn extension(&self) -> &str {
        self.extension.get_ref()
    }

    /// The declaration-to-variant mapping, if substitution is enabled.
    pub fn variant_rule(&self) -> Option<VariantRule> {
        let variant = self.variant_extension.get_ref();
        if variant.is_empty() {
            return None;
        }
        Some(VariantRule::new(self.extension(), variant.as_str()))
    }

    pub fn include_dir(&self) -> &Path {
        Path::new(self.include_dir.get_ref())
    }

    /// Resolve `banned` and `extra_banned` into one set.
    pub fn banned_headers(&self) -> BannedHeaders {
        let mut set: BannedHeaders = match &self.banned {
            Some(names) => names.iter().map(|n| n.get_ref().clone()).collect(),
            None => BannedHeaders::defaults(),
        };
        set.extend(self.extra_banned.iter().map(|n| n.get_ref().clone()));
        set
    }
}

/// What to do when `<module>/<include_dir>` is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingIncludeDir {
    /// Treat as zero headers and still generate a test file
    #[default]
    Empty,
    /// Fail with a configuration error
    Error,
}

/// Maps a declaration header to its implementation-template sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRule {
    declaration: String,
    variant: String,
}

impl VariantRule {
    pub fn new(declaration: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            variant: variant.into(),
        }
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Variant file name for `header`, or `None` if `header` does not use
    /// the declaration extension.
    pub fn variant_of(&self, header: &str) -> Option<String> {
        swap_extension(header, &self.declaration, &self.variant)
    }
}
