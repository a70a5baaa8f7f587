use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;
use url::Url;

use super::RenderFetch;
use crate::error::{ResolveError, Result};

/// How much of a page the browser loads before navigation is considered done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadStrategy {
    /// Navigation completes as soon as the initial response arrives
    None,
    /// Navigation completes after all sub-resources finish loading
    Normal,
}

impl PageLoadStrategy {
    fn as_str(self) -> &'static str {
        match self {
            PageLoadStrategy::None => "none",
            PageLoadStrategy::Normal => "normal",
        }
    }
}

/// Drives a headless browser through a WebDriver server to load pages
/// that need script execution
///
/// Every call creates its own session and tears it down before returning,
/// on success and failure paths alike.
#[derive(Debug, Clone)]
pub struct WebDriverFetcher {
    webdriver_url: String,
    timeout: Duration,
    poll_interval: Duration,
}

impl WebDriverFetcher {
    /// Create a fetcher that connects to the given WebDriver server
    pub fn new(webdriver_url: &str, timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            timeout,
            poll_interval,
        }
    }

    /// Start a fresh headless session with the given page load strategy
    async fn session(&self, strategy: PageLoadStrategy) -> Result<Client> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "moz:firefoxOptions".to_string(),
            json!({ "args": ["--headless"] }),
        );
        caps.insert("pageLoadStrategy".to_string(), json!(strategy.as_str()));
        // Native dialogs would otherwise stall the element waits below
        caps.insert("unhandledPromptBehavior".to_string(), json!("dismiss"));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&self.webdriver_url)
            .await?;
        ::log::debug!(
            "Started WebDriver session at {} with page load strategy {:?}",
            self.webdriver_url,
            strategy
        );
        Ok(client)
    }

    /// Poll until `selector` matches an element in the DOM
    async fn wait_for(&self, client: &Client, selector: &str) -> Result<Element> {
        client
            .wait()
            .at_most(self.timeout)
            .every(self.poll_interval)
            .for_element(Locator::Css(selector))
            .await
            .map_err(|e| match e {
                CmdError::WaitTimeout => ResolveError::ElementNotFound(format!(
                    "no element matched {:?} within {:?}",
                    selector, self.timeout
                )),
                other => ResolveError::WebDriver(other),
            })
    }

    async fn render_markup(&self, client: &Client, url: &Url, selectors: &[&str]) -> Result<String> {
        client.goto(url.as_str()).await?;
        for selector in selectors {
            self.wait_for(client, selector).await?;
        }
        Ok(client.source().await?)
    }

    async fn capture_element(&self, client: &Client, url: &Url, selector: &str) -> Result<Vec<u8>> {
        client.goto(url.as_str()).await?;
        let element = self.wait_for(client, selector).await?;
        Ok(element.screenshot().await?)
    }
}

#[async_trait]
impl RenderFetch for WebDriverFetcher {
    async fn markup_after(&self, url: &Url, selectors: &[&str]) -> Result<String> {
        let client = self.session(PageLoadStrategy::None).await?;
        let outcome = self.render_markup(&client, url, selectors).await;
        close_session(client).await;
        outcome
    }

    async fn screenshot_element(&self, url: &Url, selector: &str) -> Result<Vec<u8>> {
        // A single image element benefits from waiting for the full load
        let client = self.session(PageLoadStrategy::Normal).await?;
        let outcome = self.capture_element(&client, url, selector).await;
        close_session(client).await;
        outcome
    }
}

/// Tear down a session without masking the outcome of the work it did
async fn close_session(client: Client) {
    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }
}
