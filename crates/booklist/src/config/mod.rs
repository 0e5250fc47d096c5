//! Configuration for the catalog client.

mod file;

use std::time::Duration;

pub use file::{AuthorEntry, ConfigFile};

/// Catalog protocol constants.
pub mod api {
    use std::time::Duration;

    /// Count endpoint, relative to the catalog URL.
    pub const COUNT_ENDPOINT: &str = "search/count";

    /// Page endpoint, relative to the catalog URL.
    pub const SEARCH_ENDPOINT: &str = "search";

    /// Query parameter carrying the cache-busting nonce.
    pub const NONCE_PARAM: &str = "_";

    /// Timeout for HTTP connect and read.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    /// Largest page the catalog will return.
    pub const MAX_HITS_PER_PAGE: u32 = 30;

    /// Page requests allowed per search phase before giving up.
    pub const MAX_PAGE_REQUESTS: u32 = 50;

    /// Newest additions first.
    pub const SORT_CRITERIA: &str = "NewlyAdded";

    /// Static headers sent with every request, besides `Referer`.
    ///
    /// Names are lower-case so they can be used with `HeaderName::from_static`.
    pub const HEADERS: &[(&str, &str)] = &[
        ("x-requested-with", "XMLHttpRequest"),
        ("content-type", "application/json; charset=utf-8"),
        ("accept", "application/json, text/javascript, */*; q=0.01"),
        ("accept-language", "en-US,en;q=0.8"),
        ("ls2pac-config-type", "pac"),
        ("ls2pac-config-name", "default - Go Live load"),
    ];
}

/// How page requests move through a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pagination {
    /// Advance `startIndex` by the number of records received so far.
    #[default]
    Offset,
    /// Always request `startIndex = 0`.
    ///
    /// This is what the catalog's own search page sends. Result sets larger than one
    /// page receive the first page repeatedly, which ends in an over-count error.
    FirstPageOnly,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the library's CARL.X catalog.
    pub catalog_url: String,

    /// Request timeout (connect and read).
    pub request_timeout: Duration,

    /// Records requested per page; the catalog caps this at 30.
    pub hits_per_page: u32,

    /// Page requests allowed per search phase.
    pub max_page_requests: u32,

    /// Pagination strategy.
    pub pagination: Pagination,
}

impl Config {
    /// Create a configuration for the given catalog with protocol defaults.
    #[must_use]
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            request_timeout: api::REQUEST_TIMEOUT,
            hits_per_page: api::MAX_HITS_PER_PAGE,
            max_page_requests: api::MAX_PAGE_REQUESTS,
            pagination: Pagination::default(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            request_timeout: Duration::from_secs(2),
            max_page_requests: 10,
            ..Self::new(base_url)
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the page request bound.
    #[must_use]
    pub const fn with_max_page_requests(mut self, max: u32) -> Self {
        self.max_page_requests = max;
        self
    }

    /// Override the pagination strategy.
    #[must_use]
    pub const fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}
