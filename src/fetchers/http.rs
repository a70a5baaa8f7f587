use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use super::{FetchOutcome, HttpFetch};
use crate::error::{ResolveError, Result};

/// Requests are abandoned after this long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Transient transport failures are retried this many times
const MAX_RETRIES: u32 = 3;

/// Plain HTTP fetcher with bounded retries for transient transport failures
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with its own connection-pooling client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutcome> {
        let mut attempt = 0;
        loop {
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();

                    if status == reqwest::StatusCode::FORBIDDEN {
                        ::log::debug!("GET {} blocked with {}", url, status);
                        return Ok(FetchOutcome::Blocked(status.as_u16()));
                    }

                    // Other client/server errors fail fast; rendering would
                    // not help a missing resource or a broken server
                    if status.is_client_error() || status.is_server_error() {
                        return Err(ResolveError::Status {
                            url: url.to_string(),
                            status: status.as_u16(),
                        });
                    }

                    let body = response.bytes().await?;
                    ::log::debug!("GET {} returned {} bytes", url, body.len());
                    return Ok(FetchOutcome::Success(body.to_vec()));
                }
                Err(e) if attempt < MAX_RETRIES && (e.is_timeout() || e.is_connect()) => {
                    attempt += 1;
                    ::log::warn!(
                        "GET {} failed ({}), retry {} of {}",
                        url,
                        e,
                        attempt,
                        MAX_RETRIES
                    );
                }
                Err(e) => return Err(ResolveError::Transport(e)),
            }
        }
    }
}
