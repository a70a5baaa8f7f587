use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for a title and favicon lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// URL for the WebDriver instance used for rendering escalation
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum seconds to wait for elements to appear in a rendered page
    #[serde(default = "default_render_timeout_secs")]
    pub render_timeout_secs: u64,

    /// Seconds between element presence checks while waiting
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl LookupConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Total time to wait for rendered elements
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// Cadence at which rendered pages are polled for elements
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            render_timeout_secs: default_render_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for render_timeout_secs
fn default_render_timeout_secs() -> u64 {
    10
}

/// Default value for poll_interval_secs
fn default_poll_interval_secs() -> u64 {
    1
}
