//! Data models for the CARL.X catalog search API.
//!
//! Wire types use `#[serde(rename_all = "camelCase")]` to match API naming, and
//! `#[serde(default)]` on every field the catalog may omit.

mod media;
mod publication;
mod search;

pub use media::MediaType;
pub use publication::{AuthorResults, Publication, UNKNOWN};
pub use search::{
    CatalogRecord, CountResponse, FacetFilter, PageResponse, SearchFilter, SearchRequest,
    UNKNOWN_YEAR,
};
