use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::config::PageConfig;
use crate::models::PageType;

mod hackernews;

pub use hackernews::HackerNewsScraper;

/// Produces one listing page worth of raw timestamp attributes, in document
/// order, capped upstream. Rows missing a usable timestamp element come back
/// as None.
#[async_trait]
pub trait ListingScraper: Send + Sync {
    async fn scrape(&self, client: &Client) -> Result<Vec<Option<String>>>;
    fn page_config(&self) -> &PageConfig;
    fn page_type(&self) -> PageType;
}
