use crate::enums::language::Language;
use crate::enums::suggestion::Suggestion;
use crate::enums::suggestion_category::SuggestionCategory;
use crate::services::analysis_history::AnalysisHistory;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::api_response::{HealthResponse, StatusResponse};
use crate::structs::config::output_config::OutputConfig;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print_analysis_report(result: &AnalysisResult) {
        log::info!("\n🔍 CODE ANALYSIS REPORT");
        log::info!("======================");
        log::info!("🆔 Analysis ID: {}", result.id);
        if let Some(file_name) = &result.file_name {
            log::info!("📄 File: {file_name}");
        }
        if let Some(language) = result.language {
            log::info!("{} Language: {}", language.icon(), language.label());
        }
        if let Some(created_at) = result.created_at_display() {
            log::info!("🕒 Created: {created_at}");
        }

        if result.is_failed() {
            log::error!(
                "❌ The service could not analyze this code: {}",
                result.error.as_deref().unwrap_or("no reason given")
            );
            return;
        }

        for category in SuggestionCategory::ALL {
            Self::print_category(category, result.suggestions(category));
        }

        Self::print_summary(result);
    }

    fn print_category(category: SuggestionCategory, items: &[Suggestion]) {
        log::info!("\n{} {} ({})", category.emoji(), category.title(), items.len());
        log::info!("{RULE}");

        if items.is_empty() {
            log::info!("  ✅ Nothing found in this category.");
            return;
        }

        for (i, item) in items.iter().enumerate() {
            log::info!("  {}. {}", i + 1, item.text());
            if let Some(line) = item.line() {
                log::info!("     📍 Line: {line}");
            }
            if let Some(code) = item.code() {
                for code_line in code.lines() {
                    log::info!("     │ {code_line}");
                }
            }
            if let Some(fix) = item.fix() {
                log::info!("     💡 {fix}");
            }
        }
    }

    fn print_summary(result: &AnalysisResult) {
        let stats = result.stats();
        log::info!("\n📊 ANALYSIS SUMMARY");
        log::info!("{RULE}");
        for category in SuggestionCategory::ALL {
            log::info!("  {} {:<28} {}", category.emoji(), category.title(), stats.count(category));
        }
        log::info!("  Total suggestions: {}", stats.total());
    }

    pub fn print_history(history: &AnalysisHistory, output: &OutputConfig) {
        log::info!("\n🕘 Session history ({} analyses)", history.len());
        log::info!("{RULE}");

        if history.is_empty() {
            log::info!("  No analyses completed in this session.");
            return;
        }

        for entry in history.entries() {
            let stats = entry.stats();
            log::info!(
                "  {} • {}",
                entry.file_name.as_deref().unwrap_or("Code analysis"),
                entry.created_at_display().as_deref().unwrap_or("unknown time")
            );
            if output.show_code_preview {
                if let Some(preview) = entry.code_preview(output.preview_chars) {
                    log::info!("    {}", preview.replace('\n', " "));
                }
            }
            log::info!(
                "    {} • {} suggestions • {}",
                entry.language.map_or_else(|| "UNKNOWN".to_string(), |l| l.as_str().to_uppercase()),
                stats.total(),
                stats.summary_line()
            );
        }
    }

    pub fn print_status(status: &StatusResponse) {
        log::info!(
            "{} Analysis {} is {}{}",
            status.status.emoji(),
            status.analysis_id,
            status.status,
            status.timestamp.as_deref().map(|t| format!(" (as of {t})")).unwrap_or_default()
        );
    }

    pub fn print_health(health: &HealthResponse) {
        let icon = if health.status == "healthy" { "✅" } else { "⚠️" };
        log::info!("{icon} Service status: {}", health.status);
        if let Some(redis) = &health.redis {
            log::info!("   🗄️ Redis: {redis}");
        }
        if let Some(rabbitmq) = &health.rabbitmq {
            log::info!("   🐇 RabbitMQ: {rabbitmq}");
        }
    }

    pub fn print_languages() {
        log::info!("📋 Supported languages:");
        for language in Language::ALL {
            let extensions: Vec<String> = language.extensions().iter().map(|e| format!(".{e}")).collect();
            log::info!(
                "  {} {:<12} {:<11} {}",
                language.icon(),
                language.label(),
                language.as_str(),
                extensions.join(", ")
            );
        }
    }
}
