use std::path::Path;

use hdrtest_manifest::{BannedHeaders, VariantRule};

/// How a single header appears in the generated test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    /// Mentioned in a comment only
    Banned { header: String },
    /// The implementation-template sibling is included instead
    Variant { header: String, variant: String },
    /// The header itself is included
    Plain { header: String },
}

impl Include {
    /// The enumerated header this directive stands for.
    pub fn header(&self) -> &str {
        match self {
            Include::Banned { header }
            | Include::Variant { header, .. }
            | Include::Plain { header } => header,
        }
    }

    /// The file the compiler actually sees, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Include::Banned { .. } => None,
            Include::Variant { variant, .. } => Some(variant),
            Include::Plain { header } => Some(header),
        }
    }

    pub fn is_banned(&self) -> bool {
        matches!(self, Include::Banned { .. })
    }

    /// Render the source line, without the trailing newline.
    ///
    /// `generator` is named in the comment left for banned headers.
    pub fn render(&self, generator: &str) -> String {
        match self {
            Include::Banned { header } => {
                format!("// #include \"{}\" // Banned in {}", header, generator)
            }
            Include::Variant { variant, .. } => format!("#include \"{}\"", variant),
            Include::Plain { header } => format!("#include \"{}\"", header),
        }
    }
}

/// Decides the include directive for each header of a page.
///
/// Banned headers win over variants; a variant is used only when its file
/// exists next to the header.
#[derive(Debug, Clone, Copy)]
pub struct IncludeResolver<'a> {
    include_dir: &'a Path,
    banned: &'a BannedHeaders,
    variant: Option<&'a VariantRule>,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(
        include_dir: &'a Path,
        banned: &'a BannedHeaders,
        variant: Option<&'a VariantRule>,
    ) -> Self {
        Self {
            include_dir,
            banned,
            variant,
        }
    }

    pub fn resolve(&self, header: &str) -> Include {
        if self.banned.contains(header) {
            tracing::debug!(header, "banned header");
            return Include::Banned {
                header: header.to_string(),
            };
        }

        if let Some(variant) = self.variant.and_then(|rule| rule.variant_of(header))
            && self.include_dir.join(&variant).exists()
        {
            tracing::debug!(header, variant = %variant, "using variant header");
            return Include::Variant {
                header: header.to_string(),
                variant,
            };
        }

        Include::Plain {
            header: header.to_string(),
        }
    }

    /// Resolve every header, keeping their order.
    pub fn resolve_all<S: AsRef<str>>(&self, headers: &[S]) -> Vec<Include> {
        headers.iter().map(|h| self.resolve(h.as_ref())).collect()
    }
}
