use std::collections::HashMap;
use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_PREVIEW_CHARS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_headers() -> HashMap<String, String> {
        HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    pub const fn default_max_attempts() -> u32 {
        DEFAULT_MAX_POLL_ATTEMPTS
    }

    pub const fn default_interval_ms() -> u64 {
        DEFAULT_POLL_INTERVAL_MS
    }

    pub const fn default_show_code_preview() -> bool {
        true
    }

    pub const fn default_preview_chars() -> usize {
        DEFAULT_PREVIEW_CHARS
    }
}
