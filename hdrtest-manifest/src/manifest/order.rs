//! Header ordering applied before pagination.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Order in which enumerated headers are assigned to pages.
///
/// Page boundaries depend on this order, so it is part of the configuration
/// rather than whatever the platform's directory listing happens to yield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderOrder {
    /// Lexicographic by the bytes of the file name
    #[default]
    Sorted,
    /// Directory listing order, not reproducible across platforms
    Listing,
}

impl HeaderOrder {
    /// Returns the order identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderOrder::Sorted => "sorted",
            HeaderOrder::Listing => "listing",
        }
    }

    /// Reorder `names` in place.
    pub fn apply(&self, names: &mut [String]) {
        match self {
            HeaderOrder::Sorted => names.sort_unstable(),
            HeaderOrder::Listing => {}
        }
    }
}

impl fmt::Display for HeaderOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeaderOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sorted" | "sort" => Ok(HeaderOrder::Sorted),
            "listing" | "list" => Ok(HeaderOrder::Listing),
            _ => Err(format!(
                "unknown header order '{}', expected 'sorted' or 'listing'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(HeaderOrder::from_str("sorted").unwrap(), HeaderOrder::Sorted);
        assert_eq!(HeaderOrder::from_str("Sorted").unwrap(), HeaderOrder::Sorted);
        assert_eq!(
            HeaderOrder::from_str("listing").unwrap(),
            HeaderOrder::Listing
        );
        assert!(HeaderOrder::from_str("random").is_err());
    }

    #[test]
    fn test_deserialize() {
        let order: HeaderOrder = serde_json::from_str(r#""listing""#).unwrap();
        assert_eq!(order, HeaderOrder::Listing);
    }

    #[test]
    fn test_apply() {
        let mut names = vec!["b.h".to_string(), "B.h".to_string(), "a.h".to_string()];
        HeaderOrder::Listing.apply(&mut names);
        assert_eq!(names, ["b.h", "B.h", "a.h"]);

        HeaderOrder::Sorted.apply(&mut names);
        assert_eq!(names, ["B.h", "a.h", "b.h"]);
    }
}
