//! Check operation - configuration summary.

use std::path::Path;

use hdrtest_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the manifest; this collects what it resolves to.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let headers = &manifest.headers;

    CheckReport {
        config_path: config_path.to_path_buf(),
        header_extension: headers.extension().to_string(),
        variant_extension: headers.variant_rule().map(|rule| rule.variant().to_string()),
        order: headers.order.to_string(),
        include_dir: headers.include_dir().to_path_buf(),
        output_extension: manifest.output.extension().to_string(),
        test_dir: manifest.output.test_dir().to_path_buf(),
        banned: manifest.banned_headers().iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_check_defaults() {
        let report = check(&Manifest::default(), Path::new("hdrtest.toml"));

        assert_eq!(report.header_extension, "h");
        assert_eq!(report.variant_extension.as_deref(), Some("hxx"));
        assert_eq!(report.order, "sorted");
        assert_eq!(report.banned.len(), 13);
    }

    #[test]
    fn test_check_without_variants() {
        let manifest = Manifest::from_str("[headers]\nvariant_extension = \"\"\nbanned = []\n").unwrap();
        let report = check(&manifest, Path::new("hdrtest.toml"));

        assert_eq!(report.variant_extension, None);
        assert!(report.banned.is_empty());
    }
}
