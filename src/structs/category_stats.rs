use crate::enums::suggestion_category::SuggestionCategory;
use crate::structs::analysis_result::AnalysisResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub errors: usize,
    pub security: usize,
    pub refactor: usize,
    pub readability: usize,
}

impl CategoryStats {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            errors: result.errors.len(),
            security: result.security.len(),
            refactor: result.refactor.len(),
            readability: result.readability.len(),
        }
    }

    pub const fn count(&self, category: SuggestionCategory) -> usize {
        match category {
            SuggestionCategory::Errors => self.errors,
            SuggestionCategory::Security => self.security,
            SuggestionCategory::Refactor => self.refactor,
            SuggestionCategory::Readability => self.readability,
        }
    }

    pub const fn total(&self) -> usize {
        self.errors + self.security + self.refactor + self.readability
    }

    /// Compact "🚨 2 errors • 🔒 1 security" line, omitting empty categories.
    pub fn summary_line(&self) -> String {
        let parts: Vec<String> = SuggestionCategory::ALL
            .iter()
            .filter(|category| self.count(**category) > 0)
            .map(|category| format!("{} {} {}", category.emoji(), self.count(*category), category.key()))
            .collect();

        if parts.is_empty() {
            "no suggestions".to_string()
        } else {
            parts.join(" • ")
        }
    }
}
