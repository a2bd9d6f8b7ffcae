use crate::structs::analysis_result::AnalysisResult;

/// Outcome of a single fetch-result call that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPoll {
    Ready(AnalysisResult),
    NotReady,
}

impl ResultPoll {
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
