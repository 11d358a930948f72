// src/apod.rs
// NASA Astronomy Picture of the Day client

use std::time::Duration;

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Request timeout for APOD fetches
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout for the shared client
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// One APOD entry as the API returns it. `code`/`msg` are only present
/// on error replies (404 for dates with no picture).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataApod {
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub hdurl: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub service_version: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Create the shared HTTP client with appropriate defaults.
///
/// Built once at startup and handed to everything that fetches, so
/// connections to the APOD endpoint are pooled instead of re-opened on
/// every tick.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(2)
        .user_agent("hpschd mesostic engine")
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Fetch one APOD entry.
///
/// A decoded body carrying `code`/`msg` (the API's 404 shape for empty
/// archive dates) is surfaced as [`Error::Fetch`]; the caller decides
/// whether to retry with another date.
pub async fn fetch_apod(client: &reqwest::Client, url: &str) -> Result<DataApod> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let entry: DataApod = response.json().await?;

    if let Some(code) = entry.code {
        let msg = entry.msg.unwrap_or_default();
        return Err(Error::Fetch(format!("APOD API returned {code}: {msg}")));
    }
    if !status.is_success() {
        return Err(Error::Fetch(format!("APOD API returned HTTP {status}")));
    }

    debug!(date = %entry.date, title = %entry.title, "APOD entry fetched");
    Ok(entry)
}

/// Chance operation: a random archive date in `20YY-MM-DD` form.
///
/// Day runs to 31 regardless of month, so an occasional date is invalid;
/// the API answers 404 for those and the next tick simply rolls again.
pub fn random_date() -> String {
    let mut rng = rand::rng();
    let year: u32 = rng.random_range(0..20);
    let month: u32 = rng.random_range(1..12);
    let day: u32 = rng.random_range(1..=31);
    format!("20{year:02}-{month:02}-{day:02}")
}
