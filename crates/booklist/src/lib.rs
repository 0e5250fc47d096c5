//! booklist
//!
//! Searches a public library's catalog website for this year's publications by a
//! list of authors. Only catalogs running the CARL.X Integrated Library System are
//! supported: their search page is backed by JSON endpoints that report a match
//! count and return pages of matching records.
//!
//! # Features
//!
//! - **Two-phase search**: records with an unknown publication year (usually
//!   upcoming releases), then records for the current year
//! - **Media type filter**: a fixed vocabulary of CARL.X formats, see [`MediaType`]
//! - **Consistency checks**: disagreement between the count and page endpoints is
//!   an error, never silently absorbed
//!
//! # Example
//!
//! ```no_run
//! use booklist::{CatalogClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CatalogClient::new(Config::new("https://catalog.library.loudoun.gov/"))?;
//!
//!     for publication in client.search("Patterson, James", "book on cd").await? {
//!         println!("[{}] {}", publication.format, publication.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod report;

pub use client::CatalogClient;
pub use config::Config;
pub use error::{CatalogError, ConfigError, ReportError};
pub use models::{MediaType, Publication};
