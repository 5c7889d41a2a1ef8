//! Connection settings for the functions endpoint.

use std::time::Duration;

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the functions live and how to authenticate.
#[derive(Debug, Clone)]
pub struct FunctionsConfig {
    /// Base URL of the hosted backend, e.g. `https://xyz.example.co`.
    pub base_url: String,
    /// Sent as both the bearer token and the `apikey` header.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl FunctionsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Load from `FUNCTIONS_URL` / `FUNCTIONS_API_KEY`.
    ///
    /// Returns `None` when `FUNCTIONS_URL` is unset or blank.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("FUNCTIONS_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())?;
        let config = Self::new(base_url);
        Some(match std::env::var("FUNCTIONS_API_KEY") {
            Ok(key) if !key.is_empty() => config.with_api_key(key),
            _ => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = FunctionsConfig::new("http://localhost:54321/");
        assert_eq!(config.base_url, "http://localhost:54321");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
