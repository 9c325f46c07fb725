//! Headers kept out of live compilation.

use std::collections::BTreeSet;

/// Headers that cannot be compiled standalone in a default build.
///
/// Entries need an optional third-party dependency, are deprecated, guard
/// against direct inclusion, or close an include cycle.
pub const DEFAULT_BANNED_HEADERS: &[&str] = &[
    // pre-processor check steers users to itkMacro.h
    "itkExceptionObject.h",
    // minc2.h may be unavailable
    "itkMINC2ImageIO.h",
    "itkFFTWForwardFFTImageFilter.h",
    "itkFFTWInverseFFTImageFilter.h",
    "itkFFTWRealToHalfHermitianForwardFFTImageFilter.h",
    "itkFFTWHalfHermitianToRealInverseFFTImageFilter.h",
    "itkFFTWComplexToComplexImageFilter.h",
    "itkFFTWCommon.h",
    // needs Python.h
    "itkPyBuffer.h",
    // circular includes
    "itkVanHerkGilWermanErodeDilateImageFilter.h",
    // deprecated
    "itkBSplineDeformableTransform.h",
    "vtkCaptureScreen.h",
    "itkBSplineDeformableTransformInitializer.h",
];

/// Set of header file names emitted as comments instead of includes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedHeaders {
    names: BTreeSet<String>,
}

impl BannedHeaders {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The [`DEFAULT_BANNED_HEADERS`] set.
    pub fn defaults() -> Self {
        DEFAULT_BANNED_HEADERS.iter().copied().collect()
    }

    /// Add a header name.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Whether `name` is banned.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Banned names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BannedHeaders {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for BannedHeaders {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let banned = BannedHeaders::defaults();
        assert_eq!(banned.len(), 13);
        assert!(banned.contains("itkPyBuffer.h"));
        assert!(banned.contains("vtkCaptureScreen.h"));
        assert!(!banned.contains("itkImage.h"));
    }

    #[test]
    fn test_extend_dedups() {
        let mut banned: BannedHeaders = ["A.h", "B.h"].into_iter().collect();
        banned.extend(["B.h", "C.h"]);
        assert_eq!(banned.iter().collect::<Vec<_>>(), vec!["A.h", "B.h", "C.h"]);
    }

    #[test]
    fn test_exact_match_only() {
        let banned: BannedHeaders = ["itkPyBuffer.h"].into_iter().collect();
        assert!(!banned.contains("itkPyBuffer.hxx"));
        assert!(!banned.contains("include/itkPyBuffer.h"));
    }
}
