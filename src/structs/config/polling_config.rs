use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::sleep_duration_millis;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "ConfigHelper::default_interval_ms")]
    pub interval_ms: u64,
}

impl PollingConfig {
    pub const fn interval(&self) -> Duration {
        sleep_duration_millis(self.interval_ms)
    }

    /// Wall-clock ceiling of one polling run.
    pub fn budget(&self) -> Duration {
        self.interval() * self.max_attempts
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_attempts: ConfigHelper::default_max_attempts(),
            interval_ms: ConfigHelper::default_interval_ms(),
        }
    }
}
