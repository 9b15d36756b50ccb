//! Loading everything a result page shows for one job

use crate::aggregate::{aggregate, AggregatedResult};
use crate::selection::ResultSelection;
use crate::subjobs::{discover_sub_jobs, fetch_sub_job_queries, IndividualQuery};
use async_trait::async_trait;
use multiblast_bio::{individual_query_sequence, OrganismMaps, WdkRecordType};
use multiblast_client::{poll_job, poll_report, BlastApi, JobPollOutcome, ReportPollOutcome};
use multiblast_core::{
    ApiResult, ErrorDetails, JobDetails, MultiBlastError, MultiQueryReport, ReportConfig,
    ReportFormat,
};
use multiblast_params::{config_to_param_values, ParamValues};
use serde::Serialize;
use std::time::Duration;

/// Where organism ↔ file maps come from
#[async_trait]
pub trait OrganismMapSource: Send + Sync {
    async fn organism_maps(&self) -> ApiResult<OrganismMaps>;
}

/// Maps known ahead of time
#[derive(Debug, Clone, Default)]
pub struct StaticOrganismMaps(pub OrganismMaps);

#[async_trait]
impl OrganismMapSource for StaticOrganismMaps {
    async fn organism_maps(&self) -> ApiResult<OrganismMaps> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub job: JobDetails,
    pub selection: ResultSelection,
    /// Display program: the task when set, else the tool
    pub program: String,
    pub target_type: String,
    pub wdk_record_type: Option<WdkRecordType>,
    /// Query text of the selection
    pub query: String,
    pub sub_jobs: Vec<IndividualQuery>,
    pub result: AggregatedResult,
    /// Form values that revise and rerun the selection
    pub rerun_params: ParamValues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ResultPageOutcome {
    Loaded(Box<ResultPage>),
    /// The job or its report ended `errored`
    QueueingError { job_id: String },
    RequestError(ErrorDetails),
    /// The selected result does not exist
    NotFound { message: String },
}

/// Target type of a job, read back as the suffix of its first target
fn target_type_of(job: &JobDetails) -> Option<String> {
    let target = job.targets.as_ref()?.first()?;
    target
        .target
        .strip_prefix(target.organism.as_str())
        .filter(|suffix| !suffix.is_empty())
        .map(str::to_string)
}

/// Why a page could not be loaded
enum LoadFailure {
    Request(ErrorDetails),
    Queueing(String),
    NotFound(String),
}

impl From<ErrorDetails> for LoadFailure {
    fn from(details: ErrorDetails) -> Self {
        LoadFailure::Request(details)
    }
}

impl From<LoadFailure> for ResultPageOutcome {
    fn from(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::Request(details) => ResultPageOutcome::RequestError(details),
            LoadFailure::Queueing(job_id) => ResultPageOutcome::QueueingError { job_id },
            LoadFailure::NotFound(message) => ResultPageOutcome::NotFound { message },
        }
    }
}

/// Load the result page of `job_id`.
///
/// The job's query, its completion, and its sub-jobs' queries are fetched
/// concurrently; once the job completes, the JSON report and the organism
/// maps are fetched concurrently. The first failure of a stage ends the
/// load and drops the rest of that stage, including a pending job poll.
/// `selection` defaults by query count.
pub async fn load_result_page(
    api: &BlastApi,
    organisms: &dyn OrganismMapSource,
    job_id: &str,
    selection: Option<ResultSelection>,
    default_target_type: &str,
    interval: Duration,
) -> ResultPageOutcome {
    match load(api, organisms, job_id, selection, default_target_type, interval).await {
        Ok(page) => ResultPageOutcome::Loaded(Box::new(page)),
        Err(failure) => failure.into(),
    }
}

async fn load(
    api: &BlastApi,
    organisms: &dyn OrganismMapSource,
    job_id: &str,
    selection: Option<ResultSelection>,
    default_target_type: &str,
    interval: Duration,
) -> Result<ResultPage, LoadFailure> {
    let query = async { Ok::<_, LoadFailure>(api.fetch_query(job_id).await?) };
    let completed_job = async {
        match poll_job(api, job_id, interval).await {
            JobPollOutcome::Completed(job) => Ok(job),
            JobPollOutcome::QueueingError(job) => Err(LoadFailure::Queueing(job.id)),
            JobPollOutcome::RequestError(details) => Err(details.into()),
        }
    };
    let sub_job_queries = async {
        let jobs = api.fetch_jobs().await?;
        Ok::<_, LoadFailure>(fetch_sub_job_queries(api, &discover_sub_jobs(job_id, &jobs)).await?)
    };
    let (query, job, sub_jobs) = futures::try_join!(query, completed_job, sub_job_queries)?;

    let report_config = ReportConfig::new(ReportFormat::SingleFileBlastJson);
    let report = match poll_report(api, job_id, &report_config, interval).await {
        ReportPollOutcome::Completed(report) => report,
        ReportPollOutcome::QueueingError(report) => return Err(LoadFailure::Queueing(report.job_id)),
        ReportPollOutcome::RequestError(details) => return Err(details.into()),
    };

    let (multi_query_report, maps) = futures::try_join!(
        api.fetch_single_file_json_report(&report.report_id),
        organisms.organism_maps()
    )?;

    let query_count = multi_query_report.query_count();
    let selection = selection
        .unwrap_or_else(|| ResultSelection::default_for(query_count))
        .validate(query_count)
        .map_err(|e| match e {
            MultiBlastError::NotFound(message) => LoadFailure::NotFound(message),
            other => LoadFailure::NotFound(other.to_string()),
        })?;

    let (result, selected_query) = match selection {
        ResultSelection::Combined => (
            aggregate(&multi_query_report, &maps.files_to_organisms),
            query.clone(),
        ),
        ResultSelection::Individual(index) => {
            let single = MultiQueryReport {
                blast_output2: multi_query_report
                    .blast_output2
                    .get(index - 1)
                    .cloned()
                    .into_iter()
                    .collect(),
            };
            let individual = sub_jobs
                .iter()
                .find(|sub_job| sub_job.index as usize == index && sub_job.job_id != job.id)
                .map(|sub_job| sub_job.query.clone())
                .unwrap_or_else(|| individual_query_sequence(&query, index).to_string());
            (aggregate(&single, &maps.files_to_organisms), individual)
        }
    };

    let target_type = target_type_of(&job).unwrap_or_else(|| default_target_type.to_string());
    let rerun_params = config_to_param_values(
        &job,
        &selected_query,
        &target_type,
        &result.databases,
        &maps.files_to_organisms,
    );
    tracing::info!("Loaded {} result of job {}", selection, job.id);

    Ok(ResultPage {
        program: job.config.program().to_string(),
        wdk_record_type: result
            .databases
            .first()
            .and_then(|db| WdkRecordType::from_db_name(db)),
        job,
        selection,
        target_type,
        query: selected_query,
        sub_jobs,
        result,
        rerun_params,
    })
}
