use std::time::Duration;
use crate::structs::config::polling_config::PollingConfig;

/// Progress of one polling run. Owned by a single in-flight call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub analysis_id: String,
    pub attempts_made: u32,
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollState {
    pub fn new(analysis_id: impl Into<String>, polling: &PollingConfig) -> Self {
        Self {
            analysis_id: analysis_id.into(),
            attempts_made: 0,
            max_attempts: polling.max_attempts,
            interval: polling.interval(),
        }
    }

    pub const fn is_exhausted(&self) -> bool {
        self.attempts_made >= self.max_attempts
    }

    pub fn record_attempt(&mut self) {
        self.attempts_made += 1;
    }

    pub fn waited(&self) -> Duration {
        self.interval * self.attempts_made
    }
}
