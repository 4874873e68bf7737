use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;

const DEFAULT_TIMEOUT_MS: u64 = 5_000;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub simulated_latency: Duration,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, &'static str> {
        Ok(Config {
            port: lookup("PORT")
                .ok_or("An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: lookup("SCHEME").ok_or("An error occured while getting SCHEME env param")?,
            host: lookup("HOST").ok_or("An error occured while getting HOST env param")?,
            simulated_latency: match lookup("SIMULATED_LATENCY_MS") {
                Some(raw) => Duration::from_millis(
                    raw.parse::<u64>()
                        .map_err(|_| "An error occured while parsing SIMULATED_LATENCY_MS env param")?,
                ),
                None => Duration::ZERO,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Settings for talking to a dashboard backend over HTTP.
#[derive(Clone, Debug)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn try_parse() -> Result<RemoteConfig, &'static str> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<RemoteConfig, &'static str> {
        let base_url = lookup("DASHBOARD_BASE_URL")
            .ok_or("An error occured while getting DASHBOARD_BASE_URL env param")?;
        let timeout_ms = match lookup("DASHBOARD_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| "An error occured while parsing DASHBOARD_TIMEOUT_MS env param")?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self::new(base_url, Duration::from_millis(timeout_ms)))
    }
}
