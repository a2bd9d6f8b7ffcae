use std::collections::HashMap;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::timeout_duration_secs;
use crate::helpers::config_helper::ConfigHelper;

/// Connection settings for the analysis service. Passed explicitly into the
/// HTTP transport at construction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_headers")]
    pub headers: HashMap<String, String>,
}

impl ApiConfig {
    pub const fn request_timeout(&self) -> Duration {
        timeout_duration_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            headers: ConfigHelper::default_headers(),
        }
    }
}
