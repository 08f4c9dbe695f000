use anyhow::Result;
use std::sync::Arc;
use tracing::info;

mod config;
mod console;
mod models;
mod parsers;
mod prompt;
mod scrapers;
mod utils;

use crate::config::Config;
use crate::scrapers::{HackerNewsScraper, ListingScraper};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hn_order_check=info".parse()?),
        )
        .init();

    info!("Starting Hacker News order check");

    // Load configuration
    let config = Arc::new(Config::load()?);

    // Initialize HTTP client
    let client = utils::http::create_client(&config)?;

    // Ask which listing to check; an invalid answer ends the run here
    let page_type = prompt::choose_page_type()?;

    let scraper = HackerNewsScraper::new(config.clone(), page_type.clone());
    info!("Checking the {} listing", scraper.page_config().name);

    // Collect the raw timestamps, newest rows first on a sorted page
    let samples = scraper.scrape(&client).await?;

    // Verify the ordering and show the outcome
    let report = parsers::verify_ordering(page_type, &samples);
    console::present(&report);

    Ok(())
}
