use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle {
    #[serde(rename = "analysisId")]
    pub analysis_id: String,
}

impl JobHandle {
    pub fn new(analysis_id: impl Into<String>) -> Self {
        Self {
            analysis_id: analysis_id.into(),
        }
    }
}

/// Success body of `POST /analyze`. The id is optional here so that its
/// absence can be reported instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub analysis_id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}
