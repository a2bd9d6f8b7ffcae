use std::sync::Arc;
use ailinter::enums::language::Language;
use ailinter::errors::AilinterError;
use ailinter::services::job_client::AnalysisJobClient;
use ailinter::structs::analysis_request::AnalysisRequest;
use ailinter::structs::config::polling_config::PollingConfig;
use proptest::prelude::*;
use tokio_util::sync::CancellationToken;
use super::support::ScriptedTransport;

proptest! {
    #[test]
    fn whitespace_only_code_is_rejected_locally(code in "[ \t\r\n]{0,40}") {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let transport = Arc::new(ScriptedTransport::accepting("abc"));
        let client = AnalysisJobClient::new(transport.clone(), PollingConfig::default());

        let outcome = runtime.block_on(
            client.submit_and_await(&AnalysisRequest::new(code, Language::Rust), &CancellationToken::new()),
        );

        let rejected = matches!(outcome, Err(AilinterError::Validation { .. }));
        prop_assert!(rejected, "blank code reached the transport: {:?}", outcome);
        prop_assert_eq!(transport.submit_count(), 0);
        prop_assert_eq!(transport.fetch_count(), 0);
    }

    #[test]
    fn submitted_code_is_trimmed(
        lead in "[ \t\n]{0,5}",
        body in "[a-z][a-z0-9 ]{0,20}[a-z0-9]",
        tail in "[ \t\n]{0,5}",
    ) {
        let request = AnalysisRequest::new(format!("{lead}{body}{tail}"), Language::Python);
        let payload = request.to_payload().unwrap();
        prop_assert_eq!(payload.code, body);
        prop_assert_eq!(payload.file_name, "code.txt");
    }
}
