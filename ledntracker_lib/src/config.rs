//! Runtime configuration read from the environment (and `.env` via dotenvy in the binary).

use std::time::Duration;

use ledntoken_api::Client;

const DEFAULT_BASE_URL: &str = "http://localhost:5091";

/// Settings for the accounts client and the view controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Base URL of the accounts API (`LEDN_API_BASE_URL`).
    pub base_url: String,
    /// Per-request timeout (`LEDN_API_TIMEOUT_SECS`).
    pub timeout: Duration,
    /// Quiet period before a search keystroke issues a request (`LEDN_SEARCH_DEBOUNCE_MS`).
    pub search_debounce: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            search_debounce: Duration::from_millis(250),
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("LEDN_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(env_u64("LEDN_API_TIMEOUT_SECS", 30)),
            search_debounce: Duration::from_millis(env_u64("LEDN_SEARCH_DEBOUNCE_MS", 250)),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Builds an API client from these settings.
    pub fn client(&self) -> Client {
        Client::with_base_url(&self.base_url).with_timeout(self.timeout)
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_server() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:5091");
        assert_eq!(cfg.search_debounce, Duration::from_millis(250));
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn base_url_override() {
        let cfg = TrackerConfig::default().with_base_url("http://example.test");
        assert_eq!(cfg.client().base_url(), "http://example.test");
    }

    #[test]
    fn env_u64_falls_back_on_garbage() {
        assert_eq!(env_u64("LEDN_TEST_SURELY_UNSET_VARIABLE", 7), 7);
    }
}
