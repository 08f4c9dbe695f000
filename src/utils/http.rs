use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

use crate::config::Config;

pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .pool_max_idle_per_host(2)
        .build()?;

    Ok(client)
}

/// Single-shot fetch. A transport error or non-success status ends the run;
/// the only tolerated gaps are per-row extraction gaps further down.
pub async fn fetch(client: &Client, url: &str) -> Result<Response> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error {} for {}", response.status(), url);
    }

    Ok(response)
}
