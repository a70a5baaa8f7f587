pub mod http;
pub mod render;

// Re-export the concrete fetchers for convenience
pub use http::HttpFetcher;
pub use render::WebDriverFetcher;

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

/// Outcome of a single plain HTTP fetch
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The server answered with a usable response body
    Success(Vec<u8>),

    /// The server refused the request in a way that suggests it blocks
    /// non-browser clients (HTTP 403)
    Blocked(u16),
}

/// The closed set of fetch strategies the resolver can pick from,
/// cheapest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Plain HTTP GET
    Plain,
    /// Browser-rendered fetch that waits for elements to appear
    Rendered,
    /// Browser-rendered screenshot of a single element
    Screenshot,
}

/// Plain HTTP document fetching
#[async_trait]
pub trait HttpFetch {
    /// Fetch `url`, distinguishing bot-blocked responses from other failures
    async fn fetch(&self, url: &Url) -> Result<FetchOutcome>;
}

/// Browser-rendered fetching for pages that need script execution
#[async_trait]
pub trait RenderFetch {
    /// Load `url` and return the serialized DOM once every selector in
    /// `selectors` matches at least one element
    async fn markup_after(&self, url: &Url, selectors: &[&str]) -> Result<String>;

    /// Load `url` and screenshot the first element matching `selector`
    async fn screenshot_element(&self, url: &Url, selector: &str) -> Result<Vec<u8>>;
}
