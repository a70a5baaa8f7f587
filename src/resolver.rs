use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::error::{ResolveError, Result};
use crate::fetchers::{FetchOutcome, FetchStrategy, HttpFetch, RenderFetch};
use crate::parsers::{ParsedPage, html};
use crate::results::PageResult;

/// Selector for the page title element
const TITLE_SELECTOR: &str = "title";

/// Selector for the favicon link element
const ICON_SELECTOR: &str = r#"link[rel~="icon"]"#;

/// Selector for the rendered image when screenshotting an icon URL
const IMG_SELECTOR: &str = "img";

/// Resolves a page's title and favicon by escalating through fetch
/// strategies only when the cheaper one proves insufficient
///
/// Escalation is single-shot on both paths: the rendered markup fetch
/// happens at most once per resolution, and a blocked icon fetch falls back
/// to exactly one screenshot attempt.
pub struct Resolver<H, R> {
    http: H,
    render: R,
}

impl<H: HttpFetch, R: RenderFetch> Resolver<H, R> {
    pub fn new(http: H, render: R) -> Self {
        Self { http, render }
    }

    /// Resolve `url` into a title and base64-encoded favicon
    pub async fn resolve(&self, url: &Url) -> Result<PageResult> {
        ::log::info!("Resolving title and favicon for: {}", url);

        let mut strategy = FetchStrategy::Plain;
        let mut markup = match self.http.fetch(url).await? {
            FetchOutcome::Success(body) => String::from_utf8_lossy(&body).into_owned(),
            FetchOutcome::Blocked(status) => {
                ::log::info!(
                    "Plain fetch blocked with {}, escalating to {:?} fetch",
                    status,
                    FetchStrategy::Rendered
                );
                strategy = FetchStrategy::Rendered;
                self.rendered_markup(url).await?
            }
        };

        let page = loop {
            let page = html::parse(&markup);
            if page.is_complete() {
                break page;
            }

            // Scripts may still inject the missing elements, but only pay
            // for a browser once per resolution
            if strategy == FetchStrategy::Plain && page.has_script {
                ::log::info!(
                    "Markup has scripts but no title or favicon link, escalating to {:?} fetch",
                    FetchStrategy::Rendered
                );
                strategy = FetchStrategy::Rendered;
                markup = self.rendered_markup(url).await?;
                continue;
            }

            return Err(ResolveError::ElementNotFound(format!(
                "title or favicon link not found: {}",
                url
            )));
        };

        let ParsedPage { title, icon_href, .. } = page;

        let href = icon_href
            .flatten()
            .filter(|href| !href.is_empty())
            .ok_or_else(|| {
                ResolveError::DataNotFound(format!("favicon link has no source URL: {}", url))
            })?;

        let title = title.unwrap_or_default().trim().to_string();
        if title.is_empty() {
            return Err(ResolveError::DataNotFound(format!(
                "page title has no text: {}",
                url
            )));
        }

        let icon_url = url.join(&href)?;
        let favicon = self.favicon_payload(&icon_url).await?;

        Ok(PageResult::new(title, favicon))
    }

    async fn rendered_markup(&self, url: &Url) -> Result<String> {
        self.render
            .markup_after(url, &[TITLE_SELECTOR, ICON_SELECTOR])
            .await
    }

    /// Fetch the favicon at `icon_url` and encode it as base64 text
    async fn favicon_payload(&self, icon_url: &Url) -> Result<String> {
        if icon_url.scheme() == "data" {
            return decode_data_url(icon_url);
        }

        match self.http.fetch(icon_url).await? {
            FetchOutcome::Success(body) => Ok(STANDARD.encode(body)),
            FetchOutcome::Blocked(status) => {
                ::log::info!(
                    "Favicon fetch blocked with {}, escalating to {:?} fetch",
                    status,
                    FetchStrategy::Screenshot
                );
                let shot = self.render.screenshot_element(icon_url, IMG_SELECTOR).await?;
                Ok(STANDARD.encode(shot))
            }
        }
    }
}

/// Extract the payload of a base64 `data:` favicon href
///
/// Handled inline instead of being handed to the HTTP fetcher, which cannot
/// request a data URL. Decoding validates the payload before it is
/// re-encoded into the result.
fn decode_data_url(url: &Url) -> Result<String> {
    let path = url.path();
    let (meta, payload) = path.split_once(',').ok_or_else(|| {
        ResolveError::DataNotFound(format!("malformed data URL favicon: {}", url))
    })?;

    if !meta.to_ascii_lowercase().ends_with(";base64") {
        return Err(ResolveError::DataNotFound(format!(
            "favicon data URL is not base64 encoded: {}",
            url
        )));
    }

    let bytes = STANDARD.decode(payload)?;
    Ok(STANDARD.encode(bytes))
}
