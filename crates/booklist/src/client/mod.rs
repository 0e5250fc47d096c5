//! CARL.X catalog search client.
//!
//! A search takes two kinds of POST requests: `search/count` reports how many records
//! match the author, year and format filters, and `search` returns up to one page of
//! those records. Both are issued once for records with an unknown publication year
//! and once for the configured year.
//!
//! Requests are strictly sequential. There is no retry and no caching; the `_`
//! query parameter carries a fresh [`NonceSource`] value on every request so that
//! nothing between us and the catalog serves a stale response.

mod nonce;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, REFERER};
use url::Url;

pub use nonce::{ClockNonce, NonceSource, SequenceNonce};

use crate::config::{Config, Pagination, api};
use crate::error::{CatalogError, ClientResult};
use crate::models::{
    CatalogRecord, CountResponse, MediaType, PageResponse, Publication, SearchFilter,
    SearchRequest,
};

/// Catalog search client.
///
/// One instance is meant to be reused for every author in a run. The year filter is
/// session state: change it between searches, not during one.
pub struct CatalogClient {
    /// HTTP client with the catalog's fixed headers.
    client: Client,

    /// Catalog base URL; endpoints are resolved against it.
    catalog_url: Url,

    /// Year facet value for the second search phase.
    year_filter: String,

    /// Cache-buster generator.
    nonce: Arc<dyn NonceSource>,

    /// Request timeout, kept for error messages.
    request_timeout: Duration,

    /// Records requested per page.
    hits_per_page: u32,

    /// Page requests allowed per phase.
    max_page_requests: u32,

    /// Pagination strategy.
    pagination: Pagination,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog URL is empty or invalid, or if HTTP client
    /// initialization fails.
    pub fn new(config: Config) -> ClientResult<Self> {
        Self::with_nonce_source(config, Arc::new(ClockNonce::new()))
    }

    /// Create a new client with an explicit cache-buster source.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog URL is empty or invalid, a paging setting is out
    /// of range, or HTTP client initialization fails.
    pub fn with_nonce_source(config: Config, nonce: Arc<dyn NonceSource>) -> ClientResult<Self> {
        if config.catalog_url.trim().is_empty() {
            return Err(CatalogError::invalid_arguments("empty catalog URL"));
        }
        if !(1..=api::MAX_HITS_PER_PAGE).contains(&config.hits_per_page) {
            return Err(CatalogError::invalid_arguments(format!(
                "hits per page must be between 1 and {}, got {}",
                api::MAX_HITS_PER_PAGE,
                config.hits_per_page
            )));
        }
        if config.max_page_requests == 0 {
            return Err(CatalogError::invalid_arguments("max page requests is zero"));
        }

        let catalog_url = Url::parse(&config.catalog_url)
            .map_err(|e| CatalogError::invalid_url(&config.catalog_url, e))?;

        let client = Client::builder()
            .default_headers(default_headers(&config.catalog_url)?)
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            catalog_url,
            year_filter: chrono::Local::now().year().to_string(),
            nonce,
            request_timeout: config.request_timeout,
            hits_per_page: config.hits_per_page,
            max_page_requests: config.max_page_requests,
            pagination: config.pagination,
        })
    }

    /// Catalog base URL.
    #[must_use]
    pub const fn catalog_url(&self) -> &Url {
        &self.catalog_url
    }

    /// Year currently used for the second search phase.
    #[must_use]
    pub fn year_filter(&self) -> &str {
        &self.year_filter
    }

    /// Replace the year used for the second search phase.
    ///
    /// An empty or whitespace-only value is ignored and the previous year is kept.
    /// Mostly useful for pinning searches to a year with a known set of publications.
    pub fn set_year_filter(&mut self, year: impl ToString) {
        let year = year.to_string();
        if year.trim().is_empty() {
            tracing::debug!(current = %self.year_filter, "Ignoring empty year filter");
            return;
        }
        self.year_filter = year;
    }

    /// Search for this year's publications by `author`.
    ///
    /// `media_type` is a configuration name such as `"book on cd"`, matched
    /// case-insensitively. Results for an unknown publication year come first, then
    /// results for [`Self::year_filter`], each in the order the catalog returned them.
    ///
    /// # Errors
    ///
    /// Returns error if an argument is empty or whitespace-only, or the media type is
    /// unknown (before any request is sent), or if any request fails or the catalog
    /// contradicts itself. No partial results are returned.
    pub async fn search(&self, author: &str, media_type: &str) -> ClientResult<Vec<Publication>> {
        if author.trim().is_empty() || media_type.trim().is_empty() {
            return Err(CatalogError::invalid_arguments(format!(
                "arguments must be non-empty: author={author:?}, media={media_type:?}"
            )));
        }
        let media = MediaType::resolve(media_type)?;

        self.search_media(author, media).await
    }

    /// Search for this year's publications by `author` in an already resolved media type.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn search_media(
        &self,
        author: &str,
        media: MediaType,
    ) -> ClientResult<Vec<Publication>> {
        if author.trim().is_empty() {
            return Err(CatalogError::invalid_arguments("author must not be empty"));
        }

        let phases = [
            SearchFilter::unknown_year(media),
            SearchFilter::new(&self.year_filter, media),
        ];

        let mut results = Vec::new();
        for filter in &phases {
            let found = self.search_phase(author, filter).await?;
            results.extend(found);
        }

        tracing::info!(author, media = %media, found = results.len(), "Catalog search complete");
        Ok(results)
    }

    /// Number of records matching `author` and `filter`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, malformed JSON, a `false`
    /// success flag, or a missing `totalHits`.
    pub async fn count(&self, author: &str, filter: &SearchFilter) -> ClientResult<u64> {
        let body = SearchRequest::new(author, filter, self.hits_per_page, 0);
        let response: CountResponse = self.post(api::COUNT_ENDPOINT, &body).await?;

        if !response.success {
            return Err(CatalogError::Unsuccessful);
        }
        let total = response
            .total_hits
            .ok_or(CatalogError::MissingField("totalHits"))?;

        tracing::debug!(author, year = filter.year(), total, "Expected matches");
        Ok(total)
    }

    /// One page of raw records matching `author` and `filter`, starting at `start_index`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, malformed JSON, or a
    /// missing `resources` field.
    pub async fn page(
        &self,
        author: &str,
        filter: &SearchFilter,
        start_index: u64,
    ) -> ClientResult<Vec<CatalogRecord>> {
        let body = SearchRequest::new(author, filter, self.hits_per_page, start_index);
        let response: PageResponse = self.post(api::SEARCH_ENDPOINT, &body).await?;

        tracing::debug!(
            author,
            year = filter.year(),
            start_index,
            records = response.resources.len(),
            "Received page"
        );
        Ok(response.resources)
    }

    /// Run one phase: count, then page until the count is reached.
    async fn search_phase(
        &self,
        author: &str,
        filter: &SearchFilter,
    ) -> ClientResult<Vec<Publication>> {
        let expected = self.count(author, filter).await?;
        let mut found = Vec::new();
        if expected == 0 {
            return Ok(found);
        }

        let mut received: u64 = 0;
        let mut requests: u32 = 0;
        while received < expected {
            if requests >= self.max_page_requests {
                return Err(CatalogError::PageLimit {
                    limit: self.max_page_requests,
                    expected,
                    received,
                });
            }

            let start_index = match self.pagination {
                Pagination::Offset => received,
                Pagination::FirstPageOnly => 0,
            };
            let records = self.page(author, filter, start_index).await?;
            requests += 1;

            let page_len = records.len() as u64;
            received += page_len;
            for record in &records {
                found.extend(Publication::from_record(author, record));
            }

            if received > expected {
                return Err(CatalogError::OverCount { expected, received });
            }
            if page_len == 0 {
                return Err(CatalogError::UnderCount { expected, received });
            }
        }

        tracing::debug!(
            author,
            year = filter.year(),
            received,
            kept = found.len(),
            pages = requests,
            "Phase complete"
        );
        Ok(found)
    }

    /// POST a search body to `endpoint` and decode the JSON response.
    async fn post<T>(&self, endpoint: &str, body: &SearchRequest) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self
            .catalog_url
            .join(endpoint)
            .map_err(|e| CatalogError::invalid_url(self.catalog_url.as_str(), e))?;
        let nonce = self.nonce.next_nonce();

        tracing::debug!(%url, nonce, "Issuing catalog request");

        let body_str = serde_json::to_string(body)?;

        let response = self
            .client
            .post(url)
            .query(&[(api::NONCE_PARAM, nonce.to_string())])
            .body(body_str)
            .send()
            .await
            .map_err(|e| self.transport_error(endpoint, e))?;

        let response = Self::handle_response(endpoint, response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(endpoint, e))?;

        serde_json::from_str(&text).map_err(CatalogError::from)
    }

    /// Reject non-2xx responses.
    async fn handle_response(
        endpoint: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no reason given")
                .to_string()
        } else {
            text
        };

        Err(CatalogError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    fn transport_error(&self, endpoint: &str, error: reqwest::Error) -> CatalogError {
        if error.is_timeout() {
            CatalogError::Timeout {
                endpoint: endpoint.to_string(),
                timeout: self.request_timeout,
            }
        } else {
            CatalogError::Http(error)
        }
    }
}

/// Fixed header set plus `Referer`, which carries the catalog URL exactly as configured.
fn default_headers(catalog_url: &str) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    for &(name, value) in api::HEADERS {
        let name = HeaderName::from_static(name);
        headers.insert(name, HeaderValue::from_static(value));
    }

    let referer = HeaderValue::from_str(catalog_url)
        .map_err(|e| CatalogError::invalid_arguments(format!("referer: {e}")))?;
    headers.insert(REFERER, referer);

    Ok(headers)
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("catalog_url", &self.catalog_url.as_str())
            .field("year_filter", &self.year_filter)
            .field("pagination", &self.pagination)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    const URL: &str = "https://catalog.example.org/";

    fn client() -> CatalogClient {
        CatalogClient::new(Config::new(URL)).unwrap()
    }

    #[test]
    fn test_empty_catalog_url_rejected() {
        let err = CatalogClient::new(Config::new("")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArguments(_)));
    }

    #[test]
    fn test_invalid_catalog_url_rejected() {
        let config = Config::new("catalog.example.org");
        let err = CatalogClient::new(config).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidUrl { .. }));
    }

    #[test]
    fn test_paging_settings_validated() {
        let mut config = Config::new(URL);
        config.hits_per_page = 31;
        assert!(CatalogClient::new(config).is_err());

        let config = Config::new(URL).with_max_page_requests(0);
        assert!(CatalogClient::new(config).is_err());
    }

    #[test]
    fn test_year_filter_defaults_to_current_year() {
        let year = chrono::Local::now().year().to_string();
        assert_eq!(client().year_filter(), year);
    }

    #[test]
    fn test_set_year_filter() {
        let mut client = client();
        client.set_year_filter("2015");
        assert_eq!(client.year_filter(), "2015");

        client.set_year_filter(2016);
        assert_eq!(client.year_filter(), "2016");

        client.set_year_filter("");
        assert_eq!(client.year_filter(), "2016");

        client.set_year_filter("  ");
        assert_eq!(client.year_filter(), "2016");
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers(URL).unwrap();
        assert_eq!(headers["x-requested-with"], "XMLHttpRequest");
        assert_eq!(headers["content-type"], "application/json; charset=utf-8");
        assert_eq!(headers["referer"], URL);
        assert_eq!(headers.len(), api::HEADERS.len() + 1);
    }

    #[test]
    fn test_referer_is_not_normalized() {
        let headers = default_headers("https://catalog.example.org").unwrap();
        assert_eq!(headers["referer"], "https://catalog.example.org");

        let config = Config::new("https://catalog.example.org");
        let client = CatalogClient::new(config).unwrap();
        assert_eq!(client.catalog_url().as_str(), URL);
    }

    #[test]
    fn test_endpoint_resolution() {
        let url = client().catalog_url().join(api::COUNT_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example.org/search/count");
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("catalog.example.org"));
        assert!(debug.contains("year_filter"));
    }
}
