use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fetch-favicon")]
#[command(about = "Fetches a page's title and favicon, rendering the page only when needed")]
#[command(version)]
pub struct Args {
    /// Page URL to look up
    pub url: String,

    /// Seconds to wait for rendered elements before giving up
    #[arg(long, default_value_t = 10)]
    pub render_timeout: u64,

    /// Seconds between element presence checks while rendering
    #[arg(long, default_value_t = 1)]
    pub poll_interval: u64,

    /// WebDriver server used for rendering escalation
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,
}
