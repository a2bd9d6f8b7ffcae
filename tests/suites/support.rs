use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use ailinter::errors::{AilinterError, AilinterResult};
use ailinter::structs::analysis_request::AnalyzePayload;
use ailinter::structs::api_response::RawResponse;
use ailinter::traits::analysis_transport::AnalysisTransport;
use async_trait::async_trait;
use tokio::time::Instant;

pub fn not_found() -> AilinterResult<RawResponse> {
    Ok(RawResponse::new(404, r#"{"detail": "Analiz sonucu bulunamadı"}"#))
}

pub fn empty_ok() -> AilinterResult<RawResponse> {
    Ok(RawResponse::new(200, ""))
}

pub fn json_ok(body: &serde_json::Value) -> AilinterResult<RawResponse> {
    Ok(RawResponse::new(200, body.to_string()))
}

pub fn network_error() -> AilinterError {
    AilinterError::transport("HTTP request", None, "connection refused")
}

/// Replays a fixed script of fetch replies, then repeats `fallback`.
pub struct ScriptedTransport {
    submit_reply: AilinterResult<RawResponse>,
    fetch_script: Mutex<VecDeque<AilinterResult<RawResponse>>>,
    fallback: AilinterResult<RawResponse>,
    submits: AtomicUsize,
    fetch_times: Mutex<Vec<Instant>>,
    fetched_ids: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn accepting(analysis_id: &str) -> Self {
        Self::with_submit_reply(Ok(RawResponse::new(
            200,
            serde_json::json!({ "analysisId": analysis_id, "message": "Analiz kuyruğa eklendi" }).to_string(),
        )))
    }

    pub fn with_submit_reply(submit_reply: AilinterResult<RawResponse>) -> Self {
        Self {
            submit_reply,
            fetch_script: Mutex::new(VecDeque::new()),
            fallback: not_found(),
            submits: AtomicUsize::new(0),
            fetch_times: Mutex::new(Vec::new()),
            fetched_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn then(self, reply: AilinterResult<RawResponse>) -> Self {
        self.fetch_script.lock().unwrap().push_back(reply);
        self
    }

    pub fn submit_count(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_times.lock().unwrap().len()
    }

    pub fn fetch_times(&self) -> Vec<Instant> {
        self.fetch_times.lock().unwrap().clone()
    }

    pub fn fetched_ids(&self) -> Vec<String> {
        self.fetched_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisTransport for ScriptedTransport {
    async fn submit(&self, _payload: &AnalyzePayload) -> AilinterResult<RawResponse> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        self.submit_reply.clone()
    }

    async fn fetch_result(&self, analysis_id: &str) -> AilinterResult<RawResponse> {
        self.fetch_times.lock().unwrap().push(Instant::now());
        self.fetched_ids.lock().unwrap().push(analysis_id.to_string());
        let next = self.fetch_script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

/// Serves several jobs at once. Each submission gets `job-<fileName>` as its
/// id; a job becomes ready on the fetch number configured for it, or never.
pub struct MultiJobTransport {
    ready_on: HashMap<String, usize>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl MultiJobTransport {
    pub fn new(ready_on: &[(&str, usize)]) -> Self {
        Self {
            ready_on: ready_on.iter().map(|(id, n)| ((*id).to_string(), *n)).collect(),
            fetches: Mutex::new(HashMap::new()),
        }
    }

    pub fn fetches_for(&self, analysis_id: &str) -> usize {
        self.fetches.lock().unwrap().get(analysis_id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl AnalysisTransport for MultiJobTransport {
    async fn submit(&self, payload: &AnalyzePayload) -> AilinterResult<RawResponse> {
        let id = format!("job-{}", payload.file_name);
        Ok(RawResponse::new(200, serde_json::json!({ "analysisId": id }).to_string()))
    }

    async fn fetch_result(&self, analysis_id: &str) -> AilinterResult<RawResponse> {
        let count = {
            let mut fetches = self.fetches.lock().unwrap();
            let count = fetches.entry(analysis_id.to_string()).or_insert(0);
            *count += 1;
            *count
        };

        match self.ready_on.get(analysis_id) {
            Some(ready_on) if count >= *ready_on => json_ok(&serde_json::json!({
                "id": analysis_id,
                "status": "completed",
                "errors": [],
                "security": [],
                "refactor": [],
                "readability": []
            })),
            _ => not_found(),
        }
    }
}

/// Accepts the job, then never answers a fetch.
pub struct StalledTransport {
    pub fetches: AtomicUsize,
}

#[async_trait]
impl AnalysisTransport for StalledTransport {
    async fn submit(&self, _payload: &AnalyzePayload) -> AilinterResult<RawResponse> {
        Ok(RawResponse::new(200, r#"{"analysisId": "stalled"}"#))
    }

    async fn fetch_result(&self, _analysis_id: &str) -> AilinterResult<RawResponse> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        futures::future::pending().await
    }
}
