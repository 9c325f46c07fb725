//! Validation of parsed manifests.

use std::path::{Component, Path};

use miette::SourceSpan;
use toml::Spanned;

use super::Manifest;
use crate::{Result, SourceContext};

/// Validate the manifest after parsing.
pub(super) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let headers = &manifest.headers;

    validate_extension(ctx, "headers.extension", &headers.extension)?;
    if !headers.variant_extension.get_ref().is_empty() {
        validate_extension(ctx, "headers.variant_extension", &headers.variant_extension)?;
        if headers.variant_extension.get_ref() == headers.extension.get_ref() {
            return Err(ctx.validation_error(
                "variant_extension must differ from extension",
                span_of(&headers.variant_extension),
            ));
        }
    }
    validate_directory(ctx, "headers.include_dir", &headers.include_dir)?;

    for name in headers.banned.iter().flatten().chain(&headers.extra_banned) {
        if name.get_ref().contains(['/', '\\']) {
            return Err(ctx.invalid_banned_header_error(name.get_ref(), span_of(name)));
        }
    }

    validate_extension(ctx, "output.extension", &manifest.output.extension)?;
    validate_directory(ctx, "output.test_dir", &manifest.output.test_dir)?;

    Ok(())
}

fn validate_extension(ctx: &SourceContext, key: &str, ext: &Spanned<String>) -> Result<()> {
    match extension_problem(ext.get_ref()) {
        Some(reason) => Err(ctx.invalid_extension_error(key, ext.get_ref(), reason, span_of(ext))),
        None => Ok(()),
    }
}

fn validate_directory(ctx: &SourceContext, key: &str, dir: &Spanned<String>) -> Result<()> {
    if is_contained_relative(dir.get_ref()) {
        Ok(())
    } else {
        Err(ctx.invalid_directory_error(key, dir.get_ref(), span_of(dir)))
    }
}

/// Why `ext` cannot be used as a file extension, if it cannot.
pub(crate) fn extension_problem(ext: &str) -> Option<&'static str> {
    if ext.is_empty() {
        Some("the extension is empty")
    } else if ext.starts_with('.') {
        Some("the extension starts with a dot")
    } else if ext.contains('.') {
        Some("the extension contains a dot")
    } else if ext.contains(['/', '\\']) {
        Some("the extension contains a path separator")
    } else if ext.chars().any(char::is_whitespace) {
        Some("the extension contains whitespace")
    } else {
        None
    }
}

/// A non-empty relative path made only of normal components.
pub(crate) fn is_contained_relative(dir: &str) -> bool {
    let path = Path::new(dir);
    !dir.is_empty()
        && path.is_relative()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Span of a value in the source; defaults carry an empty span.
fn span_of<T>(value: &Spanned<T>) -> Option<SourceSpan> {
    let range = value.span();
    (range.start < range.end).then(|| SourceSpan::from(range))
}
