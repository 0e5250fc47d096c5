//! Normalized search results.

use serde::{Deserialize, Serialize};

use super::{CatalogRecord, MediaType};

/// Placeholder for a missing format or title.
pub const UNKNOWN: &str = "Unknown";

/// A publication by the queried author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Media type as reported by the catalog, e.g. "Large Print".
    pub format: String,

    /// Publication title.
    pub title: String,
}

impl Publication {
    /// Create a publication from explicit values.
    #[must_use]
    pub fn new(format: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            title: title.into(),
        }
    }

    /// Normalize a catalog record if it belongs to `author`.
    ///
    /// The catalog's free-text search also returns records where the author only
    /// appears elsewhere, and some records have no author at all. A record is kept
    /// when its author list contains `author` verbatim (case-sensitive substring),
    /// which also matches co-authored works.
    #[must_use]
    pub fn from_record(author: &str, record: &CatalogRecord) -> Option<Self> {
        let record_author = record.author()?;
        if !record_author.contains(author) {
            return None;
        }

        Some(Self {
            format: non_empty_or_unknown(record.format.as_deref()),
            title: non_empty_or_unknown(record.short_title.as_deref()),
        })
    }
}

/// Publications found for one author, in search order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResults {
    /// Author as searched, "Last, First".
    pub author: String,

    /// Media type the search was filtered on.
    pub media_type: MediaType,

    /// Matching publications.
    pub publications: Vec<Publication>,
}

fn non_empty_or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}
