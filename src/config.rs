use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::models::PageType;

const HN_BASE_URL: &str = "https://news.ycombinator.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub pages: HashMap<String, PageConfig>,
    pub user_agent: String,
    pub max_items: usize,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub url: String,
    pub name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::with_base_url(HN_BASE_URL)
    }

    /// Build the per-page URL table from a base address. Tests use this to
    /// point the scraper at a local mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let mut pages = HashMap::new();

        for page_type in PageType::ALL {
            pages.insert(
                page_type.key().to_string(),
                PageConfig {
                    url: base.join(page_type.key())?.to_string(),
                    name: page_type.display_name().to_string(),
                },
            );
        }

        Ok(Config {
            pages,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string(),
            max_items: 100,
            request_timeout_secs: 25,
        })
    }
}
