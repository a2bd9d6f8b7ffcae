use std::path::Path;
use tokio::io::AsyncReadExt;
use crate::enums::language::Language;
use crate::errors::{AilinterError, AilinterResult};
use crate::structs::analysis_request::AnalysisRequest;

/// Builds analysis requests from files, inline text or stdin.
pub struct SourceReader;

impl SourceReader {
    /// Reads `path`. The file name becomes the request label and, unless
    /// `language` is given, the extension picks the language.
    pub async fn from_file(path: &Path, language: Option<Language>) -> AilinterResult<AnalysisRequest> {
        let code = tokio::fs::read_to_string(path).await.map_err(|e| {
            AilinterError::io_error(&format!("Reading {}", path.display()), &e.to_string())
        })?;

        let language = language
            .or_else(|| Language::from_path(path))
            .unwrap_or_default();
        let mut request = AnalysisRequest::new(code, language);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            request = request.with_file_name(name);
        }
        Ok(request)
    }

    pub fn from_text(code: &str, language: Option<Language>, file_name: Option<&str>) -> AnalysisRequest {
        let language = language
            .or_else(|| file_name.and_then(|name| Language::from_path(Path::new(name))))
            .unwrap_or_default();
        let request = AnalysisRequest::new(code, language);
        match file_name {
            Some(name) => request.with_file_name(name),
            None => request,
        }
    }

    pub async fn from_stdin(language: Option<Language>, file_name: Option<&str>) -> AilinterResult<AnalysisRequest> {
        let mut code = String::new();
        tokio::io::stdin()
            .read_to_string(&mut code)
            .await
            .map_err(|e| AilinterError::io_error("Reading stdin", &e.to_string()))?;
        Ok(Self::from_text(&code, language, file_name))
    }
}
