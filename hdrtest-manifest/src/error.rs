use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so validation code can build
/// span-annotated errors without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid extension error.
    pub fn invalid_extension_error(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidExtension {
            src: self.named_source(),
            span,
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid directory error.
    pub fn invalid_directory_error(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidDirectory {
            src: self.named_source(),
            span,
            key: key.into(),
            value: value.into(),
        })
    }

    /// Create an invalid banned header error.
    pub fn invalid_banned_header_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidBannedHeader {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --config with the path to an existing hdrtest.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hdrtest.toml")]
    #[diagnostic(code(hdrtest::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(hdrtest::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {key} '{value}'")]
    #[diagnostic(
        code(hdrtest::invalid_extension),
        help("{reason}. Write the bare extension, e.g. 'h' or 'hxx'.")
    )]
    InvalidExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid extension")]
        span: Option<SourceSpan>,
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid {key} '{value}'")]
    #[diagnostic(
        code(hdrtest::invalid_directory),
        help("use a relative path that stays inside the module, e.g. 'include'")
    )]
    InvalidDirectory {
        #[source_code]
        src: NamedSource<String>,
        #[label("must be a relative path without '..'")]
        span: Option<SourceSpan>,
        key: String,
        value: String,
    },

    #[error("banned header '{name}' is not a file name")]
    #[diagnostic(
        code(hdrtest::invalid_banned_header),
        help("list bare header names such as 'itkPyBuffer.h', without directories")
    )]
    InvalidBannedHeader {
        #[source_code]
        src: NamedSource<String>,
        #[label("contains a path separator")]
        span: Option<SourceSpan>,
        name: String,
    },
}
