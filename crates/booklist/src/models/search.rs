//! Request and response shapes for the catalog's JSON search endpoints.

use serde::{Deserialize, Serialize};

use super::MediaType;
use crate::config::api;

/// Year facet value matching records without a publication year.
pub const UNKNOWN_YEAR: &str = "unknown";

/// A single `(name, display, value)` facet constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetFilter {
    /// Value shown in the catalog UI.
    pub facet_display: String,

    /// Value matched by the catalog.
    pub facet_value: String,

    /// Facet dimension (`Year`, `Format`).
    pub facet_name: String,
}

impl FacetFilter {
    /// Create a filter whose display and match values are the same.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            facet_display: value.to_string(),
            facet_value: value.to_string(),
            facet_name: name.to_string(),
        }
    }
}

/// Year and format constraints for one search phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    year: String,
    media: MediaType,
}

impl SearchFilter {
    /// Constrain to the given year facet value.
    #[must_use]
    pub fn new(year: impl Into<String>, media: MediaType) -> Self {
        Self {
            year: year.into(),
            media,
        }
    }

    /// Constrain to records without a publication year.
    #[must_use]
    pub fn unknown_year(media: MediaType) -> Self {
        Self::new(UNKNOWN_YEAR, media)
    }

    /// Year facet value.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Facet list in the order the catalog expects: year first, then format.
    #[must_use]
    pub fn facets(&self) -> Vec<FacetFilter> {
        vec![
            FacetFilter::new("Year", &self.year),
            FacetFilter::new("Format", self.media.facet_name()),
        ]
    }
}

/// JSON body shared by the count and page endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Always true; mirrors what the catalog UI sends.
    pub add_to_history: bool,

    /// Database codes (always empty).
    pub db_codes: Vec<String>,

    /// Records per page.
    pub hits_per_page: u32,

    /// Sort order.
    pub sort_criteria: String,

    /// Offset of the first record to return.
    pub start_index: u64,

    /// Audience filter (always empty).
    pub target_audience: String,

    /// Year and format constraints.
    pub facet_filters: Vec<FacetFilter>,

    /// Free-text term; the author's "Last, First" name.
    pub search_term: String,
}

impl SearchRequest {
    /// Build a request body for the given author and phase filter.
    #[must_use]
    pub fn new(author: &str, filter: &SearchFilter, hits_per_page: u32, start_index: u64) -> Self {
        Self {
            add_to_history: true,
            db_codes: Vec::new(),
            hits_per_page,
            sort_criteria: api::SORT_CRITERIA.to_string(),
            start_index,
            target_audience: String::new(),
            facet_filters: filter.facets(),
            search_term: author.to_string(),
        }
    }
}

/// Response from `search/count`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    /// Whether the catalog could evaluate the filters.
    pub success: bool,

    /// Number of records matching the filters.
    #[serde(default)]
    pub total_hits: Option<u64>,
}

/// Response from `search`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    /// Records on this page; required.
    pub resources: Vec<CatalogRecord>,
}

/// Raw record as returned by the catalog. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Author list, e.g. "Smith, John; Doe, Jane".
    #[serde(default)]
    pub short_author: Option<String>,

    /// Format facet value, e.g. "Large Print".
    #[serde(default)]
    pub format: Option<String>,

    /// Title without subtitle.
    #[serde(default)]
    pub short_title: Option<String>,
}

impl CatalogRecord {
    /// Author field, treating null and empty the same.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.short_author.as_deref().filter(|a| !a.is_empty())
    }
}
