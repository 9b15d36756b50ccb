//! Typed operations on the job and report resources

use crate::envelope::{classify_and_report, ErrorReporter, TracingReporter};
use crate::error::TransportError;
use crate::transport::{ApiRequest, HttpTransport, Transport};
use multiblast_core::{
    ApiResult, ClientConfig, CreateJobRequest, CreateJobResponse, CreateReportRequest,
    CreateReportResponse, ErrorDetails, JobDetails, JobSummary, MultiBlastResult,
    MultiQueryReport, ReportConfig, ReportDetails, ReportSummary,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const JOBS_PATH: &str = "/jobs";
const REPORTS_PATH: &str = "/reports";

/// Client for the multi-blast service.
///
/// Every operation resolves to an [`ApiResult`]; failures never surface as
/// panics or transport errors.
#[derive(Clone)]
pub struct BlastApi {
    transport: Arc<dyn Transport>,
    reporter: Arc<dyn ErrorReporter>,
}

impl BlastApi {
    pub fn new(transport: Arc<dyn Transport>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            transport,
            reporter,
        }
    }

    /// HTTP client for the configured service, logging reported errors
    pub fn from_config(config: &ClientConfig) -> MultiBlastResult<Self> {
        let transport = HttpTransport::new(&config.service)?;
        Ok(Self::new(Arc::new(transport), Arc::new(TracingReporter)))
    }

    fn fail(&self, error: TransportError) -> ErrorDetails {
        classify_and_report(&error, self.reporter.as_ref())
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<Vec<u8>> {
        self.transport.send(request).await.map_err(|e| self.fail(e))
    }

    async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let body = self.send(request).await?;
        serde_json::from_slice(&body).map_err(|e| self.fail(e.into()))
    }

    async fn call_text(&self, request: ApiRequest) -> ApiResult<String> {
        let body = self.send(request).await?;
        String::from_utf8(body).map_err(|e| self.fail(TransportError::Decode(e.to_string())))
    }

    fn json<T: serde::Serialize>(&self, value: &T) -> ApiResult<serde_json::Value> {
        serde_json::to_value(value).map_err(|e| self.fail(e.into()))
    }

    pub async fn fetch_jobs(&self) -> ApiResult<Vec<JobSummary>> {
        self.call(ApiRequest::get(JOBS_PATH)).await
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> ApiResult<CreateJobResponse> {
        let body = self.json(request)?;
        let response: CreateJobResponse =
            self.call(ApiRequest::post(JOBS_PATH).with_json(body)).await?;
        tracing::info!("Created {} job {}", request.config.tool(), response.job_id);
        Ok(response)
    }

    pub async fn fetch_job(&self, job_id: &str) -> ApiResult<JobDetails> {
        self.call(ApiRequest::get(format!("{}/{}", JOBS_PATH, job_id)))
            .await
    }

    pub async fn rerun_job(&self, job_id: &str) -> ApiResult<()> {
        self.send(ApiRequest::post(format!("{}/{}", JOBS_PATH, job_id)))
            .await
            .map(|_| ())
    }

    /// The query text the job was submitted with
    pub async fn fetch_query(&self, job_id: &str) -> ApiResult<String> {
        self.call_text(ApiRequest::get(format!(
            "{}/{}/query?download=false",
            JOBS_PATH, job_id
        )))
        .await
    }

    pub async fn fetch_reports(&self) -> ApiResult<Vec<ReportSummary>> {
        self.call(ApiRequest::get(REPORTS_PATH)).await
    }

    pub async fn create_report(
        &self,
        job_id: &str,
        config: &ReportConfig,
    ) -> ApiResult<CreateReportResponse> {
        let body = self.json(&CreateReportRequest {
            job_id: job_id.to_string(),
            config: config.clone(),
        })?;
        self.call(ApiRequest::post(REPORTS_PATH).with_json(body))
            .await
    }

    pub async fn fetch_report(&self, report_id: &str) -> ApiResult<ReportDetails> {
        self.call(ApiRequest::get(format!("{}/{}", REPORTS_PATH, report_id)))
            .await
    }

    pub async fn rerun_report(&self, report_id: &str) -> ApiResult<()> {
        self.send(ApiRequest::post(format!("{}/{}", REPORTS_PATH, report_id)))
            .await
            .map(|_| ())
    }

    pub async fn fetch_single_file_json_report(
        &self,
        report_id: &str,
    ) -> ApiResult<MultiQueryReport> {
        self.call(ApiRequest::get(format!(
            "{}/{}/files/report.json?download=false",
            REPORTS_PATH, report_id
        )))
        .await
    }

    /// Raw contents of one file of a completed report
    pub async fn download_report_file(&self, report_id: &str, file: &str) -> ApiResult<Vec<u8>> {
        self.send(ApiRequest::get(format!(
            "{}/{}/files/{}",
            REPORTS_PATH, report_id, file
        )))
        .await
    }
}
