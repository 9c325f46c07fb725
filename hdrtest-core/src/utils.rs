//! File name helpers.

use std::path::Path;

/// Whether `name` ends in `.<ext>` (case-sensitive, `ext` without the dot).
pub fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|found| found == ext)
}

/// The part of `name` before its final extension.
pub fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
}

/// Replace the `.<from>` extension of `name` with `.<to>`.
///
/// Returns `None` when `name` does not carry the `from` extension.
pub fn swap_extension(name: &str, from: &str, to: &str) -> Option<String> {
    if !has_extension(name, from) {
        return None;
    }
    Some(format!("{}.{}", file_stem(name), to))
}
