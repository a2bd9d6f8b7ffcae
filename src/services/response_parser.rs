use serde::Deserialize;
use serde_json::Value;
use crate::enums::analysis_status::AnalysisStatus;
use crate::enums::result_poll::ResultPoll;
use crate::errors::{AilinterError, AilinterResult, GENERIC_TRANSPORT_MESSAGE};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::api_response::{ApiErrorBody, RawResponse};
use crate::structs::job_handle::{AnalyzeResponse, JobHandle};

pub struct ResponseParser;

impl ResponseParser {
    /// Server-provided error text: `message`, else `detail`.
    pub fn server_message(body: &str) -> Option<String> {
        let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
        let message = parsed.message.filter(|m| !m.trim().is_empty());
        message.or_else(|| match parsed.detail? {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        })
    }

    pub fn error_from_response(operation: &str, response: &RawResponse) -> AilinterError {
        let message = Self::server_message(&response.body)
            .unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string());
        AilinterError::transport(operation, Some(response.status), &message)
    }

    /// Interprets the reply to `POST /analyze`.
    pub fn parse_submit_response(response: &RawResponse) -> AilinterResult<JobHandle> {
        if !response.is_success() {
            return Err(Self::error_from_response("submitting analysis", response));
        }

        let body: AnalyzeResponse = serde_json::from_str(&response.body).map_err(|e| {
            AilinterError::transport(
                "submitting analysis",
                Some(response.status),
                &format!("Malformed submission response: {e}"),
            )
        })?;

        match body.analysis_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Ok(JobHandle::new(id)),
            None => Err(AilinterError::transport(
                "submitting analysis",
                Some(response.status),
                "The service accepted the analysis but returned no analysisId",
            )),
        }
    }

    /// Interprets the reply to `GET /result/{id}`.
    ///
    /// 404, an empty or `null` body, a body without a non-empty `id`, and a
    /// body whose status is still pending or processing all mean "not ready".
    /// Any other status and any body that is not valid JSON are fatal.
    pub fn classify_result_response(response: &RawResponse) -> AilinterResult<ResultPoll> {
        if response.is_not_found() {
            return Ok(ResultPoll::NotReady);
        }
        if !response.is_success() {
            return Err(Self::error_from_response("fetching analysis result", response));
        }
        if response.body.trim().is_empty() {
            return Ok(ResultPoll::NotReady);
        }

        let value: Value = serde_json::from_str(&response.body).map_err(|e| {
            AilinterError::transport(
                "fetching analysis result",
                Some(response.status),
                &format!("Malformed result payload: {e}"),
            )
        })?;

        let Some(object) = value.as_object() else {
            return Ok(ResultPoll::NotReady);
        };

        let has_id = object
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.trim().is_empty());
        if !has_id {
            return Ok(ResultPoll::NotReady);
        }

        let in_progress = object
            .get("status")
            .and_then(|status| AnalysisStatus::deserialize(status).ok())
            .is_some_and(AnalysisStatus::is_in_progress);
        if in_progress {
            return Ok(ResultPoll::NotReady);
        }

        let result: AnalysisResult = serde_json::from_value(value).map_err(|e| {
            AilinterError::transport(
                "fetching analysis result",
                Some(response.status),
                &format!("Malformed result payload: {e}"),
            )
        })?;
        Ok(ResultPoll::Ready(result))
    }
}
