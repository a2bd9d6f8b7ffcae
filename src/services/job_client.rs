use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use crate::enums::result_poll::ResultPoll;
use crate::errors::{AilinterError, AilinterResult};
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::job_handle::JobHandle;
use crate::structs::poll_state::PollState;
use crate::traits::analysis_transport::AnalysisTransport;

/// Submits an analysis job and polls the service until the result is stored,
/// the attempt budget runs out, a fatal error occurs, or the caller cancels.
///
/// Holds no per-job state: every call builds its own [`PollState`], so one
/// client can drive any number of concurrent jobs.
#[derive(Clone)]
pub struct AnalysisJobClient {
    transport: Arc<dyn AnalysisTransport>,
    polling: PollingConfig,
}

impl AnalysisJobClient {
    pub fn new(transport: Arc<dyn AnalysisTransport>, polling: PollingConfig) -> Self {
        Self { transport, polling }
    }

    pub const fn polling(&self) -> &PollingConfig {
        &self.polling
    }

    pub async fn submit_and_await(
        &self,
        request: &AnalysisRequest,
        cancel: &CancellationToken,
    ) -> AilinterResult<AnalysisResult> {
        self.submit_and_await_with(request, cancel, |_| {}).await
    }

    /// Like [`Self::submit_and_await`], calling `on_attempt` after every
    /// attempt that found the result not ready yet.
    pub async fn submit_and_await_with<F>(
        &self,
        request: &AnalysisRequest,
        cancel: &CancellationToken,
        on_attempt: F,
    ) -> AilinterResult<AnalysisResult>
    where
        F: FnMut(&PollState) + Send,
    {
        let handle = self.submit(request, cancel).await?;
        self.await_result_with(&handle, cancel, on_attempt).await
    }

    pub async fn submit(
        &self,
        request: &AnalysisRequest,
        cancel: &CancellationToken,
    ) -> AilinterResult<JobHandle> {
        let payload = request.to_payload()?;
        if cancel.is_cancelled() {
            return Err(AilinterError::Cancelled { analysis_id: None });
        }

        log::debug!("Submitting {} ({})", payload.file_name, payload.language);
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(AilinterError::Cancelled { analysis_id: None }),
            response = self.transport.submit(&payload) => response?,
        };

        let handle = ResponseParser::parse_submit_response(&response)?;
        log::debug!("Analysis accepted with id {}", handle.analysis_id);
        Ok(handle)
    }

    pub async fn await_result(
        &self,
        handle: &JobHandle,
        cancel: &CancellationToken,
    ) -> AilinterResult<AnalysisResult> {
        self.await_result_with(handle, cancel, |_| {}).await
    }

    pub async fn await_result_with<F>(
        &self,
        handle: &JobHandle,
        cancel: &CancellationToken,
        mut on_attempt: F,
    ) -> AilinterResult<AnalysisResult>
    where
        F: FnMut(&PollState) + Send,
    {
        let mut state = PollState::new(handle.analysis_id.clone(), &self.polling);
        log::debug!(
            "Polling {} every {:?}, at most {} times",
            state.analysis_id,
            state.interval,
            state.max_attempts
        );

        while !state.is_exhausted() {
            Self::ensure_active(cancel, &state)?;
            let response = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(Self::cancelled(&state)),
                response = self.transport.fetch_result(&state.analysis_id) => response?,
            };

            match ResponseParser::classify_result_response(&response)? {
                ResultPoll::Ready(result) => {
                    log::debug!(
                        "Analysis {} ready after {} attempts",
                        state.analysis_id,
                        state.attempts_made + 1
                    );
                    return Ok(result);
                }
                ResultPoll::NotReady => {
                    log::debug!(
                        "Analysis {} not ready (attempt {}/{})",
                        state.analysis_id,
                        state.attempts_made + 1,
                        state.max_attempts
                    );
                }
            }

            Self::ensure_active(cancel, &state)?;
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(Self::cancelled(&state)),
                () = tokio::time::sleep(state.interval) => {}
            }

            state.record_attempt();
            on_attempt(&state);
        }

        log::warn!("Analysis {} timed out after {} attempts", state.analysis_id, state.attempts_made);
        Err(AilinterError::Timeout {
            analysis_id: state.analysis_id.clone(),
            attempts: state.attempts_made,
            waited: state.waited(),
        })
    }

    /// One classified fetch, no waiting.
    pub async fn fetch_once(&self, analysis_id: &str) -> AilinterResult<ResultPoll> {
        let response = self.transport.fetch_result(analysis_id).await?;
        ResponseParser::classify_result_response(&response)
    }

    fn ensure_active(cancel: &CancellationToken, state: &PollState) -> AilinterResult<()> {
        if cancel.is_cancelled() {
            return Err(Self::cancelled(state));
        }
        Ok(())
    }

    fn cancelled(state: &PollState) -> AilinterError {
        log::debug!("Polling for {} cancelled", state.analysis_id);
        AilinterError::Cancelled {
            analysis_id: Some(state.analysis_id.clone()),
        }
    }
}
