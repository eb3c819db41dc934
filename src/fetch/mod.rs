//! Loading score files from disk or over HTTP.

mod basic;
mod client;
pub mod auth;

pub use auth::ApiKey;
pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use tracing::debug;

/// GETs `url` and returns the response body. Non-2xx statuses are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse().with_context(|| format!("invalid URL '{url}'"))?,
    );

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}

/// Returns `true` if `source` should be fetched rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads score data from a local file path or fetches it over HTTP,
/// attaching a bearer token to remote requests when one is given.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn read_source(source: &str, token: Option<&str>) -> Result<Vec<u8>> {
    let bytes = if is_remote(source) {
        let client = BasicClient::new();
        match token {
            Some(token) => fetch_bytes(&ApiKey::bearer(client, token)?, source).await?,
            None => fetch_bytes(&client, source).await?,
        }
    } else {
        std::fs::read(source).with_context(|| format!("failed to read {source}"))?
    };
    debug!(bytes = bytes.len(), "Source loaded");
    Ok(bytes)
}
