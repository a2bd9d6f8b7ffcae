use serde::{Deserialize, Serialize};
use crate::enums::analysis_status::AnalysisStatus;

/// Status code and body of one HTTP exchange, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Error body shapes the service may produce.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Body of `GET /status/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub analysis_id: String,
    pub status: AnalysisStatus,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub redis: Option<String>,
    #[serde(default)]
    pub rabbitmq: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
