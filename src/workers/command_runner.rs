use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::language::Language;
use crate::enums::result_poll::ResultPoll;
use crate::errors::{AilinterError, AilinterResult};
use crate::helpers::source_reader::SourceReader;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::analysis_history::AnalysisHistory;
use crate::services::http_api::HttpAnalysisApi;
use crate::services::job_client::AnalysisJobClient;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
    api_url: Option<String>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>, api_url: Option<String>) -> Self {
        Self {
            start_time: None,
            config_path,
            api_url,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AilinterResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { files, code, language, file_name } => {
                self.analyze_command(files, code, language, file_name).await
            }
            Commands::Result { analysis_id } => self.result_command(&analysis_id).await,
            Commands::Status { analysis_id } => self.status_command(&analysis_id).await,
            Commands::Health => self.health_command().await,
            Commands::Languages => {
                ReportPrinter::print_languages();
                Ok(())
            }
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    /// Loaded configuration with the `--api-url` flag applied, not yet validated.
    fn resolve_config(&self) -> AilinterResult<Config> {
        let mut config = ConfigManager::load(self.config_path.as_deref())?;
        if let Some(url) = &self.api_url {
            config.api.base_url.clone_from(url);
        }
        Ok(config)
    }

    fn load_config(&self) -> AilinterResult<Config> {
        let config = self.resolve_config()?;
        ConfigManager::validate_config(&config)
            .map_err(|errors| AilinterError::config_error(&errors.join("; "), None))?;
        Ok(config)
    }

    fn init_command(&self) -> AilinterResult<()> {
        log::info!("🚀 Initializing ailinter configuration...");
        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("✅ Configuration file created at: {}", path.display());
        log::info!("🔧 Run 'ailinter validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> AilinterResult<()> {
        log::info!("🔍 Validating ailinter configuration...");
        let config = self.resolve_config()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("  ❌ {error}");
            }
            return Err(AilinterError::config_error(
                &format!("{} problem(s) found", errors.len()),
                None,
            ));
        }

        log::info!("✅ Configuration is valid");
        log::info!("   🌐 Service: {}", config.api.base_url);
        log::info!(
            "   ⏳ Polling: every {}ms, up to {} checks ({}s budget)",
            config.polling.interval_ms,
            config.polling.max_attempts,
            config.polling.budget().as_secs()
        );
        Ok(())
    }

    fn job_client(config: &Config) -> AilinterResult<AnalysisJobClient> {
        let api = Arc::new(HttpAnalysisApi::new(&config.api)?);
        Ok(AnalysisJobClient::new(api, config.polling))
    }

    /// Readable inputs plus the read errors of files that could not be
    /// opened. Unreadable files are reported like failed jobs.
    async fn collect_requests(
        files: Vec<PathBuf>,
        code: Option<String>,
        language: Option<Language>,
        file_name: Option<String>,
    ) -> AilinterResult<(Vec<AnalysisRequest>, Vec<AilinterError>)> {
        if let Some(code) = code {
            let request = SourceReader::from_text(&code, language, file_name.as_deref());
            return Ok((vec![request], Vec::new()));
        }

        if files.is_empty() {
            log::info!("📥 Reading code from stdin (end with Ctrl-D)...");
            let request = SourceReader::from_stdin(language, file_name.as_deref()).await?;
            return Ok((vec![request], Vec::new()));
        }

        let mut requests = Vec::with_capacity(files.len());
        let mut unreadable = Vec::new();
        for path in &files {
            match SourceReader::from_file(path, language).await {
                Ok(request) => requests.push(request),
                Err(error) => {
                    log::error!("❌ {}: {}", path.display(), error.user_message());
                    unreadable.push(error);
                }
            }
        }
        Ok((requests, unreadable))
    }

    fn cancel_on_ctrl_c(cancel: &CancellationToken) -> tokio::task::JoinHandle<()> {
        let token = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("⏹️ Cancelling analysis...");
                token.cancel();
            }
        })
    }

    async fn analyze_command(
        &self,
        files: Vec<PathBuf>,
        code: Option<String>,
        language: Option<Language>,
        file_name: Option<String>,
    ) -> AilinterResult<()> {
        let config = self.load_config()?;
        let (requests, mut failures) = Self::collect_requests(files, code, language, file_name).await?;
        if requests.is_empty() {
            return Err(failures
                .pop()
                .unwrap_or_else(|| AilinterError::validation("code", "No input to analyze")));
        }
        let inputs = requests.len() + failures.len();
        let client = Self::job_client(&config)?;
        let cancel = CancellationToken::new();
        let watcher = Self::cancel_on_ctrl_c(&cancel);

        log::info!("🔍 Submitting {} analysis job(s) to {}", requests.len(), config.api.base_url);
        let outcomes = if let [request] = requests.as_slice() {
            vec![Self::analyze_single(&client, request, &cancel).await]
        } else {
            join_all(requests.iter().map(|request| client.submit_and_await(request, &cancel))).await
        };
        watcher.abort();

        let mut history = AnalysisHistory::new();
        for (request, outcome) in requests.iter().zip(outcomes) {
            match outcome {
                Ok(result) => {
                    ReportPrinter::print_analysis_report(&result);
                    history.prepend(result);
                }
                Err(error) => {
                    log::error!("❌ {}: {}", Self::label(request), error.user_message());
                    failures.push(error);
                }
            }
        }

        if inputs > 1 {
            ReportPrinter::print_history(&history, &config.output);
        }

        match failures.into_iter().next() {
            Some(first) if history.is_empty() => Err(first),
            Some(_) => {
                log::warn!("⚠️ Some analyses failed; see the errors above.");
                Ok(())
            }
            None => Ok(()),
        }
    }

    async fn analyze_single(
        client: &AnalysisJobClient,
        request: &AnalysisRequest,
        cancel: &CancellationToken,
    ) -> AilinterResult<AnalysisResult> {
        let mut spinner = AnimatedLogger::new(
            format!("⏳ Analyzing {}", Self::label(request)),
            client.polling().max_attempts,
        );
        let attempts = spinner.attempts();
        spinner.start();

        let outcome = client
            .submit_and_await_with(request, cancel, |state| {
                attempts.store(state.attempts_made, Ordering::Relaxed);
            })
            .await;

        match &outcome {
            Ok(result) => spinner.stop(&format!("Analysis {} completed", result.id)).await,
            Err(_) => spinner.error("Analysis did not complete").await,
        }
        outcome
    }

    fn label(request: &AnalysisRequest) -> &str {
        request.file_name.as_deref().unwrap_or("inline code")
    }

    async fn result_command(&self, analysis_id: &str) -> AilinterResult<()> {
        let config = self.load_config()?;
        let client = Self::job_client(&config)?;

        match client.fetch_once(analysis_id).await? {
            ResultPoll::Ready(result) => ReportPrinter::print_analysis_report(&result),
            ResultPoll::NotReady => {
                log::info!("🕒 Analysis {analysis_id} is not ready yet. Try again shortly.");
            }
        }
        Ok(())
    }

    async fn status_command(&self, analysis_id: &str) -> AilinterResult<()> {
        let config = self.load_config()?;
        let api = HttpAnalysisApi::new(&config.api)?;

        match api.fetch_status(analysis_id).await? {
            Some(status) => ReportPrinter::print_status(&status),
            None => log::warn!("⚠️ The service has no status for analysis {analysis_id}"),
        }
        Ok(())
    }

    async fn health_command(&self) -> AilinterResult<()> {
        let config = self.load_config()?;
        let api = HttpAnalysisApi::new(&config.api)?;

        log::info!("🩺 Checking {}...", api.base_url());
        let health = api.health().await?;
        ReportPrinter::print_health(&health);
        Ok(())
    }
}
