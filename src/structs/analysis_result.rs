use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::enums::analysis_status::AnalysisStatus;
use crate::enums::language::Language;
use crate::enums::suggestion::Suggestion;
use crate::enums::suggestion_category::SuggestionCategory;
use crate::structs::category_stats::CategoryStats;

/// Completed analysis as returned by `GET /result/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AnalysisStatus>,

    #[serde(default)]
    pub errors: Vec<Suggestion>,

    #[serde(default)]
    pub security: Vec<Suggestion>,

    #[serde(default)]
    pub refactor: Vec<Suggestion>,

    #[serde(default)]
    pub readability: Vec<Suggestion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl AnalysisResult {
    pub fn suggestions(&self, category: SuggestionCategory) -> &[Suggestion] {
        match category {
            SuggestionCategory::Errors => &self.errors,
            SuggestionCategory::Security => &self.security,
            SuggestionCategory::Refactor => &self.refactor,
            SuggestionCategory::Readability => &self.readability,
        }
    }

    pub fn stats(&self) -> CategoryStats {
        CategoryStats::from_result(self)
    }

    pub fn is_failed(&self) -> bool {
        self.status == Some(AnalysisStatus::Failed)
    }

    /// First `max_chars` characters of the analysed code.
    pub fn code_preview(&self, max_chars: usize) -> Option<String> {
        let code = self.code.as_deref()?;
        let preview: String = code.chars().take(max_chars).collect();
        if code.chars().count() > max_chars {
            Some(format!("{preview}..."))
        } else {
            Some(preview)
        }
    }

    /// `created_at` in local time. The service writes ISO-8601, sometimes
    /// without an offset.
    pub fn created_at_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string());
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(parsed.format("%Y-%m-%d %H:%M:%S").to_string());
        }
        Some(raw.to_string())
    }
}
