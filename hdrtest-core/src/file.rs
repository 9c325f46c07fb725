use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body (without the header from [`FileRules`])
    fn render(&self) -> String;

    /// Render the complete file content, header included
    fn contents(&self) -> String {
        let body = self.render();
        match self.rules().header {
            Some(header) => format!("{}{}", header, body),
            None => body,
        }
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_file(&path, &self.contents())
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The content goes to a temporary file next to the destination which is
/// then renamed over it, so readers never observe a partially written file.
fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let previous = fs::metadata(path).ok();
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    // New files get 0666 filtered by the process umask
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(parent).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;

    // A replaced file keeps its mode
    if let Some(previous) = &previous {
        tmp.as_file()
            .set_permissions(previous.permissions())
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(if previous.is_some() {
        WriteResult::Overwritten
    } else {
        WriteResult::Created
    })
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Text placed before the rendered body (license banner, disclaimer)
    pub header: Option<String>,
}

impl FileRules {
    /// Rules with no header.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Prepend `header` to the rendered body.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}
