use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use crate::config::constants::{ANALYZE_SEGMENT, HEALTH_SEGMENT, RESULT_SEGMENT, STATUS_SEGMENT};
use crate::errors::{AilinterError, AilinterResult};
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_request::AnalyzePayload;
use crate::structs::api_response::{HealthResponse, RawResponse, StatusResponse};
use crate::structs::config::api_config::ApiConfig;
use crate::traits::analysis_transport::AnalysisTransport;

/// `reqwest`-backed client for the analysis service.
#[derive(Clone)]
pub struct HttpAnalysisApi {
    client: Client,
    base_url: Url,
}

impl HttpAnalysisApi {
    pub fn new(config: &ApiConfig) -> AilinterResult<Self> {
        let base_url = Url::parse(config.normalized_base_url()).map_err(|e| {
            AilinterError::config_error(&format!("Invalid base URL '{}': {e}", config.base_url), Some("api.base_url"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AilinterError::config_error(
                &format!("Base URL '{}' cannot carry a path", config.base_url),
                Some("api.base_url"),
            ));
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(Self::build_headers(config)?)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn build_headers(config: &ApiConfig) -> AilinterResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                AilinterError::config_error(&format!("Invalid header name '{name}'"), Some("api.headers"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                AilinterError::config_error(&format!("Invalid value for header '{name}'"), Some("api.headers"))
            })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn read(response: reqwest::Response) -> AilinterResult<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse::new(status, body))
    }

    /// `GET /status/{id}`. `None` when the service does not know the id.
    pub async fn fetch_status(&self, analysis_id: &str) -> AilinterResult<Option<StatusResponse>> {
        let url = self.endpoint(&[STATUS_SEGMENT, analysis_id]);
        log::debug!("GET {url}");
        let response = Self::read(self.client.get(url).send().await?).await?;

        if response.is_not_found() {
            return Ok(None);
        }
        if !response.is_success() {
            return Err(ResponseParser::error_from_response("fetching analysis status", &response));
        }
        Ok(Some(serde_json::from_str(&response.body)?))
    }

    /// `GET /health`.
    pub async fn health(&self) -> AilinterResult<HealthResponse> {
        let url = self.endpoint(&[HEALTH_SEGMENT]);
        log::debug!("GET {url}");
        let response = Self::read(self.client.get(url).send().await?).await?;

        if !response.is_success() {
            return Err(ResponseParser::error_from_response("checking service health", &response));
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisApi {
    async fn submit(&self, payload: &AnalyzePayload) -> AilinterResult<RawResponse> {
        let url = self.endpoint(&[ANALYZE_SEGMENT]);
        log::debug!("POST {url} ({} bytes of {})", payload.code.len(), payload.language);
        let response = self.client.post(url).json(payload).send().await?;
        Self::read(response).await
    }

    async fn fetch_result(&self, analysis_id: &str) -> AilinterResult<RawResponse> {
        let url = self.endpoint(&[RESULT_SEGMENT, analysis_id]);
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }
}
