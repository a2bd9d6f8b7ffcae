use crate::structs::analysis_result::AnalysisResult;

/// Completed analyses of the current session, newest first.
#[derive(Debug, Clone, Default)]
pub struct AnalysisHistory {
    entries: Vec<AnalysisResult>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `result` at the front. An older entry with the same id is dropped
    /// so ids stay unique.
    pub fn prepend(&mut self, result: AnalysisResult) {
        self.entries.retain(|entry| entry.id != result.id);
        self.entries.insert(0, result);
    }

    pub fn entries(&self) -> &[AnalysisResult] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&AnalysisResult> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
