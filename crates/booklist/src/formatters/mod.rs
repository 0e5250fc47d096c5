//! Output formatters for search results.

mod json;
mod text;

pub use json::{compact_author_results, format_results_json};
pub use text::{format_heading, format_publications};
