//! JSON output.

use serde_json::{Value, json};

use crate::models::AuthorResults;

/// Compact representation of one author's results.
#[must_use]
pub fn compact_author_results(results: &AuthorResults) -> Value {
    json!({
        "author": results.author,
        "mediaType": results.media_type.facet_name(),
        "publications": results.publications,
    })
}

/// All authors' results as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_results_json(results: &[AuthorResults]) -> serde_json::Result<String> {
    let value = Value::Array(results.iter().map(compact_author_results).collect());
    serde_json::to_string_pretty(&value)
}
