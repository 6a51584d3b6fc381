/// Application configuration module
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the launch API, without trailing slash
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Zero means load once and exit
    pub refresh_seconds: u64,
    pub status_filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_base_url = lookup("LAUNCH_API_URL")
            .unwrap_or_else(|| "http://localhost:8080/api".to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            anyhow::bail!(
                "LAUNCH_API_URL must be an http(s) URL, got {:?}",
                api_base_url
            );
        }

        let request_timeout = Duration::from_secs(parse_u64(
            lookup("LAUNCH_API_TIMEOUT_SECONDS"),
            30,
        ));
        let refresh_seconds = parse_u64(lookup("REFRESH_EVERY_SECONDS"), 0);
        let status_filter = lookup("DASHBOARD_STATUS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            api_base_url,
            request_timeout,
            refresh_seconds,
            status_filter,
        })
    }
}

fn parse_u64(value: Option<String>, default: u64) -> u64 {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}
