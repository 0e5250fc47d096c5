//! Error types for the catalog client, configuration loading and reporting.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Every [`CatalogError`] is fatal to the search that raised it; the variants exist so
//! messages stay precise, not so callers can recover from individual kinds.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors from the catalog search client.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// A constructor or search argument was empty.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Media type name is not in the supported table.
    #[error("Media type of '{0}' is invalid")]
    InvalidMediaType(String),

    /// Catalog URL could not be parsed or joined.
    #[error("Invalid catalog URL '{url}': {source}")]
    InvalidUrl {
        /// URL as given
        url: String,
        /// Parser error
        source: url::ParseError,
    },

    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request to {endpoint} timed out after {timeout:?}")]
    Timeout {
        /// Endpoint path relative to the catalog URL
        endpoint: String,
        /// Configured request timeout
        timeout: Duration,
    },

    /// Non-2xx HTTP status
    #[error("Response to '{endpoint}' request: status {status}: {message}")]
    Status {
        /// Endpoint path relative to the catalog URL
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// JSON parsing error, including a missing required field
    #[error("Bad JSON data in response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Count response carried `success: false`
    #[error(
        "Unsuccessful retrieving total number of matches on author, media and year"
    )]
    Unsuccessful,

    /// Response parsed but a field the protocol needs was absent
    #[error("Response is missing the '{0}' field")]
    MissingField(&'static str),

    /// Page requests returned more records than the count request announced
    #[error(
        "Received more publications than expected; expected {expected}, currently have {received}"
    )]
    OverCount {
        /// Total reported by the count request
        expected: u64,
        /// Records received so far in this phase
        received: u64,
    },

    /// A page came back empty before the announced total was reached
    #[error(
        "Received fewer publications than expected; expected {expected}, currently have {received}"
    )]
    UnderCount {
        /// Total reported by the count request
        expected: u64,
        /// Records received so far in this phase
        received: u64,
    },

    /// The page request bound was hit before the announced total was reached
    #[error(
        "Gave up after {limit} page requests; expected {expected}, currently have {received}"
    )]
    PageLimit {
        /// Configured maximum page requests per phase
        limit: u32,
        /// Total reported by the count request
        expected: u64,
        /// Records received so far in this phase
        received: u64,
    },
}

impl CatalogError {
    /// Create an invalid arguments error.
    #[must_use]
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    /// Create an invalid catalog URL error.
    #[must_use]
    pub fn invalid_url(url: &str, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            source,
        }
    }

    /// Create an invalid media type error.
    #[must_use]
    pub fn invalid_media_type(name: impl Into<String>) -> Self {
        Self::InvalidMediaType(name.into())
    }

    /// Returns true if the error was raised before any request was issued.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments(_) | Self::InvalidMediaType(_) | Self::InvalidUrl { .. }
        )
    }

    /// Returns true if the count and page endpoints disagreed.
    #[must_use]
    pub const fn is_inconsistency(&self) -> bool {
        matches!(
            self,
            Self::OverCount { .. } | Self::UnderCount { .. } | Self::PageLimit { .. }
        )
    }
}

/// Errors from loading the YAML configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("Config file '{}': {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// I/O error
        source: std::io::Error,
    },

    /// File is not valid YAML or does not match the schema
    #[error("Config file '{}' fails schema validation: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// YAML error
        source: serde_yaml_ng::Error,
    },

    /// File parsed but a value is unusable
    #[error("Config file '{}': {message}", .path.display())]
    Invalid {
        /// Config file path
        path: PathBuf,
        /// Validation error message
        message: String,
    },
}

impl ConfigError {
    /// Create a read error for `path`.
    #[must_use]
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a schema error for `path`.
    #[must_use]
    pub fn parse(path: &Path, source: serde_yaml_ng::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a validation error for `path`.
    #[must_use]
    pub fn invalid(path: &Path, message: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Errors from writing a report for the configured authors.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Searching for one author failed; earlier authors may already be written
    #[error("Search failed for {author}")]
    Search {
        /// Author as searched, "Last, First"
        author: String,
        /// Underlying client error
        source: CatalogError,
    },

    /// Results could not be serialized
    #[error("Failed to serialize results")]
    Serialize(#[from] serde_json::Error),

    /// Output sink rejected a write
    #[error("Failed to write results")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    /// Create a search error for `author`.
    #[must_use]
    pub fn search(author: &str, source: CatalogError) -> Self {
        Self::Search {
            author: author.to_string(),
            source,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, CatalogError>;
