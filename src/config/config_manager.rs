use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{AilinterError, AilinterResult};
use crate::services::http_api::HttpAnalysisApi;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# AILinter configuration

[api]
# Address of the analysis service (overridden by AILINTER_API_URL)
base_url = "http://localhost:8000"

# Per-request timeout in seconds
timeout_secs = 30

[api.headers]
"Content-Type" = "application/json"

[polling]
# How many times to ask for the result before giving up
max_attempts = 60

# Delay between two result checks, in milliseconds
interval_ms = 2000

[output]
# Show the first characters of the analysed code in the session history
show_code_preview = true
preview_chars = 100
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `None`. A missing file
    /// yields the defaults. `AILINTER_API_URL` overrides the base URL.
    pub fn load(path: Option<&Path>) -> AilinterResult<Config> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_override(&mut config, std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    pub fn load_file(path: Option<&Path>) -> AilinterResult<Config> {
        let location = path.map_or_else(Self::default_config_path, Path::to_path_buf);

        if !location.exists() {
            if path.is_some() {
                return Err(AilinterError::config_error(
                    &format!("Configuration file not found: {}", location.display()),
                    None,
                ));
            }
            log::debug!("No configuration at {}, using defaults", location.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", location.display());
        let content = fs::read_to_string(&location).map_err(|e| {
            AilinterError::io_error(&format!("Reading {}", location.display()), &e.to_string())
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn apply_env_override(config: &mut Config, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using API URL from {API_URL_ENV}: {url}");
            config.api.base_url = url;
        }
    }

    /// Writes the sample configuration. Refuses to overwrite an existing file.
    pub fn create_sample_config(path: Option<&Path>) -> AilinterResult<PathBuf> {
        let location = path.map_or_else(Self::default_config_path, Path::to_path_buf);
        if location.exists() {
            return Err(AilinterError::config_error(
                &format!("Configuration already exists at {}", location.display()),
                None,
            ));
        }

        if let Some(parent) = location.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&location, SAMPLE_CONFIG)?;
        Ok(location)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(config.api.normalized_base_url()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!("api.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {e}", config.api.base_url)),
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if let Err(e) = HttpAnalysisApi::build_headers(&config.api) {
            errors.push(e.to_string());
        }

        if config.polling.max_attempts == 0 {
            errors.push("polling.max_attempts must be greater than zero".to_string());
        }

        if config.polling.interval_ms == 0 {
            errors.push("polling.interval_ms must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
