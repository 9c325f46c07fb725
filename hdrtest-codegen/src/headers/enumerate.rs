use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use hdrtest_core::has_extension;
use hdrtest_manifest::{HeadersConfig, MissingIncludeDir};

use super::Page;
use crate::{Error, Result};

/// Header file names found directly under a module's include directory.
#[derive(Debug, Clone)]
pub struct HeaderSet {
    include_dir: PathBuf,
    names: Vec<String>,
}

impl HeaderSet {
    /// List the headers of the module rooted at `module_source`.
    ///
    /// Only regular files directly under the include directory whose
    /// extension matches are kept; hidden files are skipped. The result is
    /// ordered per [`HeadersConfig::order`].
    pub fn enumerate(module_source: &Path, config: &HeadersConfig) -> Result<Self> {
        let include_dir = module_source.join(config.include_dir());

        let entries = match fs::read_dir(&include_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return match config.missing_include_dir {
                    MissingIncludeDir::Empty => {
                        tracing::debug!(
                            dir = %include_dir.display(),
                            "include directory missing, treating as zero headers"
                        );
                        Ok(Self::from_names(include_dir, Vec::new()))
                    }
                    MissingIncludeDir::Error => Err(Error::MissingIncludeDir { path: include_dir }),
                };
            }
            Err(source) => {
                return Err(Error::ReadDir {
                    path: include_dir,
                    source,
                });
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ReadDir {
                path: include_dir.clone(),
                source,
            })?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(
                    name = ?entry.file_name(),
                    "skipping header with a non UTF-8 name"
                );
                continue;
            };
            if name.starts_with('.') || !has_extension(&name, config.extension()) {
                continue;
            }
            if entry.path().is_file() {
                names.push(name);
            }
        }

        config.order.apply(&mut names);
        tracing::debug!(
            dir = %include_dir.display(),
            count = names.len(),
            order = %config.order,
            "enumerated headers"
        );

        Ok(Self::from_names(include_dir, names))
    }

    /// Build a header set from already known names, kept in the given order.
    pub fn from_names(include_dir: impl Into<PathBuf>, names: Vec<String>) -> Self {
        Self {
            include_dir: include_dir.into(),
            names,
        }
    }

    /// Directory the headers live in.
    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Headers covered by `page`; a page computed for a larger set is
    /// clamped to the headers that exist.
    pub fn page(&self, page: &Page) -> &[String] {
        let end = page.end().min(self.names.len());
        let start = page.start().min(end);
        &self.names[start..end]
    }
}
