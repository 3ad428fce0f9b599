use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root of `config.toml`.
///
/// ```toml
/// [api]
/// key = "DEMO_KEY"
/// base_url = "https://api.nasa.gov/planetary/apod"
/// timeout_secs = 30
///
/// [storage]
/// cache_dir = "/home/me/.cache/apod/records"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApodConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Static access key sent with every request
    #[serde(default = "default_api_key")]
    pub key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The key with everything but its last four characters masked.
    pub fn redacted_key(&self) -> String {
        let chars: Vec<char> = self.key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: default_api_key(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Never print the key itself
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &self.redacted_key())
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding one file per stored date; platform cache dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
