//! Plain text output.
//!
//! ```text
//! Patterson, James -- Book on CDs:
//!   [Book on CD ]  The Murder House
//!   [Large Print]  Cross Justice
//! ```

use crate::models::{AuthorResults, Publication};

/// Heading line for one author: `"Last, First -- <Facet>s:"`.
#[must_use]
pub fn format_heading(results: &AuthorResults) -> String {
    format!("{} -- {}s:", results.author, results.media_type)
}

/// One line per publication, with the bracketed format column padded to the widest format.
///
/// Some media types are supersets of others (Book includes Large Print), so the
/// format is shown per publication.
#[must_use]
pub fn format_publications(publications: &[Publication]) -> String {
    let width = publications
        .iter()
        .map(|p| p.format.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for publication in publications {
        let line = format!("  [{:<width$}]  {}", publication.format, publication.title);
        output.push_str(&line);
        output.push('\n');
    }
    output
}
