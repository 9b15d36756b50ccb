//! HTTP transport and envelope behaviour against a mock service

use multiblast_client::{BlastApi, HttpTransport};
use multiblast_core::config::ServiceConfig;
use multiblast_core::{ErrorDetails, JobStatus, ReportFormat};
use multiblast_test::fixtures::{job_json, job_summary_json};
use multiblast_test::RecordingReporter;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer, reporter: Arc<RecordingReporter>) -> BlastApi {
    let config = ServiceConfig {
        base_url: server.uri(),
        auth_key: Some("secret-key".to_string()),
        ..ServiceConfig::default()
    };
    let transport = HttpTransport::new(&config).unwrap();
    BlastApi::new(Arc::new(transport), reporter)
}

#[tokio::test]
async fn test_fetch_job_sends_auth_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .and(header("Auth-Key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json("job-1", "queued")))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(RecordingReporter::new()));
    let job = api.fetch_job("job-1").await.unwrap();

    assert_eq!(job.id, "job-1");
    assert_eq!(job.status, JobStatus::Queued);
    assert_eq!(job.config.program(), "blastn");
}

#[tokio::test]
async fn test_fetch_jobs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            job_summary_json("parent", "completed", None),
            job_summary_json("child", "completed", Some(("parent", 1))),
        ])))
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(RecordingReporter::new()));
    let jobs = api.fetch_jobs().await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].index_within("parent"), Some(1));
}

#[tokio::test]
async fn test_invalid_input_is_classified_but_not_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": "invalid-input",
            "errors": {"general": [], "byKey": {"config.eValue": ["must be positive"]}}
        })))
        .mount(&server)
        .await;

    let reporter = Arc::new(RecordingReporter::new());
    let api = api_for(&server, reporter.clone());
    let job = multiblast_test::fixtures::job_details("unused", JobStatus::Queued);
    let request = multiblast_core::CreateJobRequest {
        site: "PlasmoDB".to_string(),
        targets: job.targets.clone().unwrap_or_default(),
        config: job.config,
        max_result_size: 0,
        description: None,
    };

    let result = api.create_job(&request).await;
    match result {
        Err(ErrorDetails::InvalidInput { errors }) => {
            assert_eq!(errors.by_key["config.eValue"], vec!["must be positive"]);
        }
        other => panic!("expected invalid-input, got {:?}", other),
    }
    assert!(reporter.reported().is_empty());
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "server-error",
            "message": "database unavailable",
            "requestId": "req-77"
        })))
        .mount(&server)
        .await;

    let reporter = Arc::new(RecordingReporter::new());
    let api = api_for(&server, reporter.clone());

    let expected = ErrorDetails::ServerError {
        message: "database unavailable".to_string(),
        request_id: Some("req-77".to_string()),
    };
    assert_eq!(api.fetch_job("job-1").await, Err(expected.clone()));
    assert_eq!(reporter.reported(), vec![expected]);
}

#[tokio::test]
async fn test_plain_text_failure_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let reporter = Arc::new(RecordingReporter::new());
    let api = api_for(&server, reporter.clone());

    match api.fetch_reports().await {
        Err(ErrorDetails::Unknown { message }) => assert!(message.starts_with("502:")),
        other => panic!("expected unknown, got {:?}", other),
    }
    assert_eq!(reporter.reported().len(), 1);
}

#[tokio::test]
async fn test_create_report_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reports"))
        .and(body_partial_json(json!({"jobID": "job-1", "format": "single-file-blast-json"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reportID": "rep-1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs/job-1/query"))
        .and(query_param("download", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(">seq1\nACGT\n"))
        .mount(&server)
        .await;

    let api = api_for(&server, Arc::new(RecordingReporter::new()));
    let created = api
        .create_report(
            "job-1",
            &multiblast_core::ReportConfig::new(ReportFormat::SingleFileBlastJson),
        )
        .await
        .unwrap();
    assert_eq!(created.report_id, "rep-1");
    assert_eq!(api.fetch_query("job-1").await.unwrap(), ">seq1\nACGT\n");
}

#[tokio::test]
async fn test_connection_failure_is_unknown() {
    let config = ServiceConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 2,
        ..ServiceConfig::default()
    };
    let reporter = Arc::new(RecordingReporter::new());
    let api = BlastApi::new(Arc::new(HttpTransport::new(&config).unwrap()), reporter.clone());

    assert!(matches!(
        api.fetch_jobs().await,
        Err(ErrorDetails::Unknown { .. })
    ));
    assert_eq!(reporter.reported().len(), 1);
}
