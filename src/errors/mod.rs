use std::time::Duration;
use thiserror::Error;

pub const GENERIC_TRANSPORT_MESSAGE: &str =
    "An error occurred while analyzing the code. Please try again.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AilinterError {
    /// Local precondition failure. Never reaches the network.
    #[error("Validation error for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Any failure from the service that is not the "not ready" signal.
    #[error("Transport error during {operation}: {message}")]
    Transport {
        operation: String,
        status_code: Option<u16>,
        message: String,
    },

    #[error("Analysis {analysis_id} timed out after {attempts} attempts")]
    Timeout {
        analysis_id: String,
        attempts: u32,
        waited: Duration,
    },

    #[error("Analysis cancelled")]
    Cancelled { analysis_id: Option<String> },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    #[error("I/O error during {operation}: {reason}")]
    Io { operation: String, reason: String },
}

impl AilinterError {
    pub fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn transport(operation: &str, status_code: Option<u16>, message: &str) -> Self {
        Self::Transport {
            operation: operation.to_string(),
            status_code,
            message: message.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(ToString::to_string),
        }
    }

    pub fn io_error(operation: &str, reason: &str) -> Self {
        Self::Io {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Validation { .. }
        )
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation { .. } | Self::Cancelled { .. } => ErrorSeverity::Low,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Configuration { .. } => {
                ErrorSeverity::Medium
            }
            Self::Io { .. } => ErrorSeverity::High,
        }
    }

    /// Text meant for the person at the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { .. } => "Please enter the code to analyze.".to_string(),
            Self::Transport { message, status_code, .. } => {
                let mut msg = if message.trim().is_empty() {
                    GENERIC_TRANSPORT_MESSAGE.to_string()
                } else {
                    message.clone()
                };
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg
            }
            Self::Timeout { waited, .. } => format!(
                "The analysis took too long (waited {}s). Please try again.",
                waited.as_secs()
            ),
            Self::Cancelled { analysis_id } => match analysis_id {
                Some(id) => format!("Analysis {id} was cancelled."),
                None => "Analysis was cancelled.".to_string(),
            },
            Self::Configuration { message, field } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                msg.push_str("\n💡 Run 'ailinter validate' to check your configuration.");
                msg
            }
            Self::Io { operation, reason } => {
                format!("{operation} failed: {reason}\n💡 Check the file path and permissions")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

pub type AilinterResult<T> = Result<T, AilinterError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &AilinterError) {
        let severity = error.severity();
        log::debug!("[{}] {:?}", severity.name(), error);
        log::error!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            log::info!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<reqwest::Error> for AilinterError {
    fn from(error: reqwest::Error) -> Self {
        let operation = error
            .url()
            .map_or_else(|| "HTTP request".to_string(), |u| format!("HTTP request to {u}"));
        Self::Transport {
            operation,
            status_code: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AilinterError {
    fn from(error: serde_json::Error) -> Self {
        Self::Transport {
            operation: "decoding response".to_string(),
            status_code: None,
            message: format!("Malformed JSON payload: {error}"),
        }
    }
}

impl From<toml::de::Error> for AilinterError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: error.message().to_string(),
            field: None,
        }
    }
}

impl From<std::io::Error> for AilinterError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}
