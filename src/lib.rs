// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod persist;
pub mod resolver;
pub mod results;

// Re-export commonly used types for convenience
pub use error::{ResolveError, Result};
pub use results::PageResult;

use url::Url;

use crate::config::LookupConfig;
use crate::fetchers::{HttpFetcher, WebDriverFetcher};
use crate::resolver::Resolver;

/// Main builder for resolving a page's title and favicon
pub struct Lookup {
    url: String,
    config: LookupConfig,
}

impl Lookup {
    /// Create a new Lookup for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: LookupConfig::default(),
        }
    }

    /// Set how long to wait for rendered elements to appear
    pub fn with_render_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.render_timeout_secs = timeout_seconds;
        self
    }

    /// Set the cadence at which rendered pages are polled for elements
    pub fn with_poll_interval(mut self, interval_seconds: u64) -> Self {
        self.config.poll_interval_secs = interval_seconds;
        self
    }

    /// Set the WebDriver server used for rendering escalation
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.webdriver_url = webdriver_url.to_string();
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: LookupConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = LookupConfig::from_file(path)?;
        Ok(self)
    }

    /// Resolve the page into a title and base64-encoded favicon
    ///
    /// The browser is only launched when the plain fetch proves
    /// insufficient.
    pub async fn resolve(self) -> Result<PageResult> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let url = Url::parse(&self.url)?;
        let http = HttpFetcher::new()?;
        let render = WebDriverFetcher::new(
            &config.webdriver_url,
            config.render_timeout(),
            config.poll_interval(),
        );

        Resolver::new(http, render).resolve(&url).await
    }
}
