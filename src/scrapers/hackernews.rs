use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::info;

use crate::config::{Config, PageConfig};
use crate::models::PageType;
use crate::parsers::clean_text;
use crate::scrapers::ListingScraper;
use crate::utils::http::fetch;

pub struct HackerNewsScraper {
    config: Arc<Config>,
    page_type: PageType,
}

impl HackerNewsScraper {
    pub fn new(config: Arc<Config>, page_type: PageType) -> Self {
        Self { config, page_type }
    }
}

#[async_trait]
impl ListingScraper for HackerNewsScraper {
    async fn scrape(&self, client: &Client) -> Result<Vec<Option<String>>> {
        let page_config = self.page_config();
        info!("Scraping Hacker News {}...", page_config.name);

        let response = fetch(client, &page_config.url).await?;
        let html = response.text().await?;

        let samples = extract_timestamps(&html, self.config.max_items)?;

        info!(
            "Found {} story rows on {} listing page",
            samples.len(),
            page_config.name
        );

        Ok(samples)
    }

    fn page_config(&self) -> &PageConfig {
        &self.config.pages[self.page_type.key()]
    }

    fn page_type(&self) -> PageType {
        self.page_type.clone()
    }
}

/// Pull the age attribute for up to `limit` story rows, top to bottom.
fn extract_timestamps(html: &str, limit: usize) -> Result<Vec<Option<String>>> {
    let document = Html::parse_document(html);
    let story_selector = Selector::parse("tr.athing")
        .map_err(|_| anyhow::anyhow!("Failed to parse story selector"))?;

    let samples = document
        .select(&story_selector)
        .take(limit)
        .map(age_title)
        .collect();

    Ok(samples)
}

/// The age span lives in the metadata row directly below each story row.
/// Comment listings have no such row, so every row there is a gap.
fn age_title(story: ElementRef) -> Option<String> {
    let mut next = story.next_sibling();
    let meta_row = loop {
        match next {
            Some(node) => {
                if let Some(elem) = ElementRef::wrap(node) {
                    break elem;
                }
                next = node.next_sibling();
            }
            None => return None,
        }
    };

    let age_selector = Selector::parse("td.subtext span.age").ok()?;
    let age = meta_row.select(&age_selector).next()?;

    age.value().attr("title").map(clean_text)
}
