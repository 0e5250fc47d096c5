//! YAML configuration file.
//!
//! # Configuration File Format
//!
//! ```yaml
//! catalog-url: https://catalog.library.loudoun.gov/
//! media-type: Book
//! authors:
//!   - firstname: James
//!     lastname: Patterson
//!     media-type: book on cd
//!
//!   - firstname: Alexander
//!     lastname: McCall Smith
//! ```
//!
//! `catalog-url` and `authors` are required. `media-type` is optional at both
//! levels; names are matched case-insensitively against [`MediaType`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::models::MediaType;

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// URL of a catalog running CARL.X.
    pub catalog_url: String,

    /// Media type for authors that don't name one.
    #[serde(default)]
    pub media_type: Option<MediaType>,

    /// Authors to search for, in output order.
    pub authors: Vec<AuthorEntry>,
}

/// One author to search for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AuthorEntry {
    /// Given name.
    pub firstname: String,

    /// Family name.
    pub lastname: String,

    /// Media type override.
    #[serde(default)]
    pub media_type: Option<MediaType>,
}

impl AuthorEntry {
    /// Name as the catalog indexes it: "Last, First".
    #[must_use]
    pub fn search_name(&self) -> String {
        format!("{}, {}", self.lastname, self.firstname)
    }

    /// This author's media type, falling back to `default`.
    #[must_use]
    pub fn media_type_or(&self, default: MediaType) -> MediaType {
        self.media_type.unwrap_or(default)
    }
}

impl ConfigFile {
    /// Read and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, is not valid YAML, doesn't match the
    /// schema, or holds an unusable value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::read(path, source))?;

        Self::from_yaml(&content, path)
    }

    /// Parse and validate configuration text; `path` is only used in messages.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid YAML, doesn't match the schema, or
    /// holds an unusable value.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(content)
            .map_err(|source| ConfigError::parse(path, source))?;

        config
            .validate()
            .map_err(|message| ConfigError::invalid(path, message))?;

        tracing::debug!(
            catalog_url = %config.catalog_url,
            authors = config.authors.len(),
            "Config file validated"
        );
        Ok(config)
    }

    /// Default media type for the file.
    #[must_use]
    pub fn default_media_type(&self) -> MediaType {
        self.media_type.unwrap_or_default()
    }

    fn validate(&self) -> Result<(), String> {
        let url = &self.catalog_url;
        let parsed = Url::parse(url)
            .map_err(|e| format!("catalog-url '{url}' is not a valid URL: {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("catalog-url '{url}' must use http or https"));
        }

        for (i, author) in self.authors.iter().enumerate() {
            if author.firstname.trim().is_empty() {
                return Err(format!("authors[{i}]: firstname must not be empty"));
            }
            if author.lastname.trim().is_empty() {
                return Err(format!("authors[{i}]: lastname must not be empty"));
            }
        }

        Ok(())
    }
}
