use clap::Parser;
use fetch_favicon::Lookup;
use fetch_favicon::persist;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting lookup for URL: {}", args.url);

    let lookup = Lookup::new(&args.url)
        .with_render_timeout(args.render_timeout)
        .with_poll_interval(args.poll_interval)
        .with_webdriver_url(&args.webdriver_url);

    let result = match lookup.resolve().await {
        Ok(result) => result,
        Err(e) => {
            ::log::error!("Lookup failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Title: {}", result.title);

    match persist::save_favicon(&result.favicon) {
        Ok(path) => println!("Favicon saved to {}", path.display()),
        Err(e) => {
            ::log::error!("Failed to save favicon: {}", e);
            std::process::exit(1);
        }
    }
}
