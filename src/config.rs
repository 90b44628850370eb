use serde::Deserialize;
use std::time::Duration;

use crate::logic::display::MIN_LIST_RESULTS;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1/name";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Quiet period after the last edit before a search fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Above this many matches nothing is rendered and the user is asked to narrow the search
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_max_results() -> usize {
    10
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
            max_results: default_max_results(),
            toast_ms: default_toast_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        if config.max_results < MIN_LIST_RESULTS {
            anyhow::bail!(
                "max_results must be at least {} (got {})",
                MIN_LIST_RESULTS,
                config.max_results
            );
        }
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
