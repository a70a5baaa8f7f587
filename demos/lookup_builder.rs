use clap::Parser;
use fetch_favicon::{Lookup, persist};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to look up
    #[arg(short, long)]
    url: String,

    /// Path to JSON configuration file
    #[arg(short, long)]
    config_file: Option<String>,

    /// Seconds to wait for rendered elements
    #[arg(short, long)]
    render_timeout: Option<u64>,

    /// WebDriver server URL
    #[arg(short, long)]
    webdriver_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    println!("Looking up title and favicon for: {}", args.url);

    let mut lookup = Lookup::new(&args.url);

    // Apply configuration from file if specified
    if let Some(config_file) = args.config_file {
        println!("Loading configuration from file: {}", config_file);
        lookup = lookup.with_config_file(config_file)?;
    }

    // Apply command-line overrides
    if let Some(render_timeout) = args.render_timeout {
        println!("Overriding render timeout: {}s", render_timeout);
        lookup = lookup.with_render_timeout(render_timeout);
    }

    if let Some(webdriver_url) = args.webdriver_url {
        println!("Overriding WebDriver URL: {}", webdriver_url);
        lookup = lookup.with_webdriver_url(&webdriver_url);
    }

    // Resolve and persist
    let result = lookup.resolve().await?;
    println!("Title: {}", result.title);

    let path = persist::save_favicon(&result.favicon)?;
    println!("Favicon saved to {}", path.display());

    Ok(())
}
