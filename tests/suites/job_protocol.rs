use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use ailinter::enums::language::Language;
use ailinter::errors::AilinterError;
use ailinter::services::job_client::AnalysisJobClient;
use ailinter::structs::analysis_request::AnalysisRequest;
use ailinter::structs::analysis_result::AnalysisResult;
use ailinter::structs::api_response::RawResponse;
use ailinter::structs::config::polling_config::PollingConfig;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use super::support::{
    empty_ok, json_ok, network_error, not_found, MultiJobTransport, ScriptedTransport, StalledTransport,
};

const INTERVAL: Duration = Duration::from_millis(2000);

fn client_for<T>(transport: &Arc<T>, polling: PollingConfig) -> AnalysisJobClient
where
    T: ailinter::traits::analysis_transport::AnalysisTransport + 'static,
{
    AnalysisJobClient::new(transport.clone(), polling)
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new("function hello() {\n  console.log('Hello World');\n}", Language::Javascript)
        .with_file_name("app.js")
}

#[tokio::test(start_paused = true)]
async fn blank_code_never_reaches_the_network() {
    let transport = Arc::new(ScriptedTransport::accepting("abc"));
    let client = client_for(&transport, PollingConfig::default());

    for code in ["", "   ", "\n\t \r\n"] {
        let err = client
            .submit_and_await(&AnalysisRequest::new(code, Language::Python), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AilinterError::Validation { .. }));
    }

    assert_eq!(transport.submit_count(), 0);
    assert_eq!(transport.fetch_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn result_arrives_on_fourth_fetch() {
    let body = serde_json::json!({
        "id": "abc",
        "errors": [],
        "security": [],
        "refactor": [],
        "readability": []
    });
    let transport = Arc::new(
        ScriptedTransport::accepting("abc")
            .then(not_found())
            .then(empty_ok())
            .then(not_found())
            .then(json_ok(&body)),
    );
    let client = client_for(&transport, PollingConfig::default());

    let result = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap();

    let expected: AnalysisResult = serde_json::from_value(body).unwrap();
    assert_eq!(result, expected);
    assert_eq!(transport.submit_count(), 1);
    assert_eq!(transport.fetch_count(), 4);
    assert!(transport.fetched_ids().iter().all(|id| id == "abc"));

    let times = transport.fetch_times();
    for pair in times.windows(2) {
        assert_eq!(pair[1] - pair[0], INTERVAL);
    }
}

#[tokio::test(start_paused = true)]
async fn never_ready_times_out_after_budget() {
    let transport = Arc::new(ScriptedTransport::accepting("abc"));
    let client = client_for(&transport, PollingConfig::default());
    let started = Instant::now();

    let err = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap_err();

    match &err {
        AilinterError::Timeout { analysis_id, attempts, waited } => {
            assert_eq!(analysis_id, "abc");
            assert_eq!(*attempts, 60);
            assert_eq!(*waited, Duration::from_secs(120));
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
    assert!(err.user_message().contains("try again"));
    assert_eq!(transport.fetch_count(), 60);
    assert_eq!(started.elapsed(), Duration::from_secs(120));
}

#[tokio::test(start_paused = true)]
async fn server_error_stops_polling_immediately() {
    let transport = Arc::new(
        ScriptedTransport::accepting("abc")
            .then(not_found())
            .then(Ok(RawResponse::new(500, r#"{"detail": "Analiz sonucu alınamadı"}"#))),
    );
    let client = client_for(&transport, PollingConfig::default());

    let err = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AilinterError::Transport { status_code: Some(500), .. }));
    assert_eq!(transport.fetch_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn network_failure_while_polling_is_fatal() {
    let transport = Arc::new(ScriptedTransport::accepting("abc").then(Err(network_error())));
    let client = client_for(&transport, PollingConfig::default());

    let err = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err, network_error());
    assert_eq!(transport.fetch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_submission_skips_polling() {
    let transport = Arc::new(ScriptedTransport::with_submit_reply(Err(network_error())));
    let client = client_for(&transport, PollingConfig::default());

    let err = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AilinterError::Transport { .. }));
    assert_eq!(transport.submit_count(), 1);
    assert_eq!(transport.fetch_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn submission_without_id_skips_polling() {
    let transport = Arc::new(ScriptedTransport::with_submit_reply(Ok(RawResponse::new(
        200,
        r#"{"message": "Analiz kuyruğa eklendi"}"#,
    ))));
    let client = client_for(&transport, PollingConfig::default());

    let err = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AilinterError::Transport { status_code: Some(200), .. }));
    assert_eq!(transport.fetch_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn concurrent_jobs_do_not_interfere() {
    let transport = Arc::new(MultiJobTransport::new(&[("job-fast.py", 2)]));
    let client = client_for(
        &transport,
        PollingConfig {
            max_attempts: 3,
            interval_ms: 2000,
        },
    );
    let cancel = CancellationToken::new();
    let fast = AnalysisRequest::new("print(1)", Language::Python).with_file_name("fast.py");
    let slow = AnalysisRequest::new("print(2)", Language::Python).with_file_name("slow.py");

    let (fast_outcome, slow_outcome) = tokio::join!(
        client.submit_and_await(&fast, &cancel),
        client.submit_and_await(&slow, &cancel),
    );

    assert_eq!(fast_outcome.unwrap().id, "job-fast.py");
    match slow_outcome.unwrap_err() {
        AilinterError::Timeout { analysis_id, attempts, .. } => {
            assert_eq!(analysis_id, "job-slow.py");
            assert_eq!(attempts, 3);
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
    assert_eq!(transport.fetches_for("job-fast.py"), 2);
    assert_eq!(transport.fetches_for("job-slow.py"), 3);
}

#[tokio::test(start_paused = true)]
async fn cancellation_during_wait_unwinds() {
    let transport = Arc::new(ScriptedTransport::accepting("abc"));
    let client = client_for(&transport, PollingConfig::default());
    let cancel = CancellationToken::new();
    let started = Instant::now();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(5)).await;
        trigger.cancel();
    });

    let err = client.submit_and_await(&request(), &cancel).await.unwrap_err();

    assert_eq!(err, AilinterError::Cancelled { analysis_id: Some("abc".to_string()) });
    assert_eq!(transport.fetch_count(), 3);
    assert_eq!(started.elapsed(), Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn cancellation_aborts_in_flight_fetch() {
    let transport = Arc::new(StalledTransport {
        fetches: AtomicUsize::new(0),
    });
    let client = client_for(&transport, PollingConfig::default());
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        trigger.cancel();
    });

    let err = client.submit_and_await(&request(), &cancel).await.unwrap_err();

    assert!(matches!(err, AilinterError::Cancelled { .. }));
    assert_eq!(transport.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_analysis_is_returned_as_result() {
    let transport = Arc::new(ScriptedTransport::accepting("abc").then(json_ok(&serde_json::json!({
        "id": "abc",
        "status": "failed",
        "error": "Gemini API unavailable"
    }))));
    let client = client_for(&transport, PollingConfig::default());

    let result = client
        .submit_and_await(&request(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_failed());
    assert_eq!(result.error.as_deref(), Some("Gemini API unavailable"));
}
