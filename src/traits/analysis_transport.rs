use async_trait::async_trait;
use crate::errors::AilinterResult;
use crate::structs::analysis_request::AnalyzePayload;
use crate::structs::api_response::RawResponse;

/// The two calls the job protocol needs from the analysis service.
///
/// Implementations return whatever status and body the service produced and
/// only fail on network-level problems; deciding what a status means is left
/// to the job client.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn submit(&self, payload: &AnalyzePayload) -> AilinterResult<RawResponse>;

    async fn fetch_result(&self, analysis_id: &str) -> AilinterResult<RawResponse>;
}
