// src/config.rs
// Environment-based configuration - single source of truth for all env vars

use std::path::PathBuf;

use tracing::info;

/// NASA demo key; fine for the default fetch cadence, which stays well
/// under the API's hourly quota.
const DEFAULT_API_KEY: &str = "DEMO_KEY";
const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Seconds between APOD fetches (HPSCHD_TIMER).
const DEFAULT_FETCH_INTERVAL: u64 = 77;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (HPSCHD_HOST, default 0.0.0.0)
    pub host: String,
    /// Bind port (HPSCHD_PORT, default 9999)
    pub port: u16,
    /// NASA API key (NASA_API_KEY)
    pub nasa_api_key: String,
    /// Full APOD URL override for tests and mirrors (HPSCHD_NASA_APOD_URL)
    pub apod_url_override: Option<String>,
    /// Spine override applied to fetched poems (HPSCHD_SPINESTRING);
    /// no default, the APOD title is the spine when unset
    pub spine_override: Option<String>,
    /// Seconds between APOD fetches (HPSCHD_TIMER)
    pub fetch_interval_secs: u64,
    /// Poem cache directory (HPSCHD_STORE, default "store")
    pub store_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults the service has always shipped with.
    pub fn from_env() -> Self {
        let config = Self {
            host: env_var("HPSCHD_HOST", "0.0.0.0"),
            port: env_var("HPSCHD_PORT", "9999").parse().unwrap_or(9999),
            nasa_api_key: env_var("NASA_API_KEY", DEFAULT_API_KEY),
            apod_url_override: read_optional("HPSCHD_NASA_APOD_URL"),
            spine_override: read_optional("HPSCHD_SPINESTRING"),
            fetch_interval_secs: env_var("HPSCHD_TIMER", "77")
                .parse()
                .unwrap_or(DEFAULT_FETCH_INTERVAL),
            store_dir: PathBuf::from(env_var("HPSCHD_STORE", "store")),
        };

        info!(
            host = %config.host,
            port = config.port,
            store = %config.store_dir.display(),
            interval = config.fetch_interval_secs,
            "configuration loaded"
        );
        config
    }

    /// APOD URL for one fetch. `date` is `None` for the current picture,
    /// `Some("YYYY-MM-DD")` for an archive entry. A full-URL override
    /// wins over assembly.
    pub fn apod_url(&self, date: Option<&str>) -> String {
        if let Some(url) = &self.apod_url_override {
            return url.clone();
        }
        match date {
            Some(d) => format!("{APOD_ENDPOINT}?date={d}&api_key={}", self.nasa_api_key),
            None => format!("{APOD_ENDPOINT}?api_key={}", self.nasa_api_key),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a single env var with a fallback value.
fn env_var(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_string())
}

/// Read a single env var, filtering empty values.
fn read_optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
