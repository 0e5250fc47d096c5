//! Search every configured author in order and write the results.

use std::io::Write;

use crate::client::CatalogClient;
use crate::config::ConfigFile;
use crate::error::ReportError;
use crate::formatters;
use crate::models::AuthorResults;

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text, one block per author
    #[default]
    Text,
    /// JSON array of authors and their publications
    Json,
}

/// Search for every author in `config`, one at a time, and write the results to `out`.
///
/// Text output is streamed: an author's heading is written and flushed before their
/// search starts, so after a failure the failed author's heading is the last line.
/// JSON output is written once, after every search succeeded.
///
/// # Errors
///
/// Returns error on the first failed search or write.
pub async fn write_report<W>(
    client: &CatalogClient,
    config: &ConfigFile,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<AuthorResults>, ReportError>
where
    W: Write + Send,
{
    let default_media = config.default_media_type();
    let mut all_results = Vec::with_capacity(config.authors.len());

    for entry in &config.authors {
        let mut results = AuthorResults {
            author: entry.search_name(),
            media_type: entry.media_type_or(default_media),
            publications: Vec::new(),
        };

        if format == OutputFormat::Text {
            writeln!(out, "{}", formatters::format_heading(&results))?;
            out.flush()?;
        }

        tracing::debug!(author = %results.author, media = %results.media_type, "Searching");
        results.publications = client
            .search_media(&results.author, results.media_type)
            .await
            .map_err(|e| ReportError::search(&results.author, e))?;

        if format == OutputFormat::Text {
            let lines = formatters::format_publications(&results.publications);
            out.write_all(lines.as_bytes())?;
        }
        all_results.push(results);
    }

    if format == OutputFormat::Json {
        let json = formatters::format_results_json(&all_results)?;
        writeln!(out, "{json}")?;
    }
    out.flush()?;

    Ok(all_results)
}
