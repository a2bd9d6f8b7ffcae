use serde::Serialize;
use crate::config::constants::DEFAULT_FILE_NAME;
use crate::enums::language::Language;
use crate::errors::{AilinterError, AilinterResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: Language,
    pub file_name: Option<String>,
}

/// Wire body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePayload {
    pub code: String,
    pub language: Language,
    pub file_name: String,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, language: Language) -> Self {
        Self {
            code: code.into(),
            language,
            file_name: None,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Checks the request and builds the submission body: trimmed code and a
    /// placeholder file name when none was given.
    pub fn to_payload(&self) -> AilinterResult<AnalyzePayload> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(AilinterError::validation("code", "code must not be empty"));
        }

        let file_name = self
            .file_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        Ok(AnalyzePayload {
            code: code.to_string(),
            language: self.language,
            file_name,
        })
    }
}
