//! Job and report lifecycle polling.
//!
//! A poll loop fetches the resource, and while its status is neither
//! `completed` nor `errored` waits a fixed interval before fetching again.
//! There is no attempt limit and no backoff. Each fetch finishes before the
//! wait starts, so polls for one resource never overlap.

use crate::api::BlastApi;
use multiblast_core::{
    ApiResult, ErrorDetails, JobDetails, JobStatus, MultiBlastError, MultiBlastResult,
    ReportConfig, ReportDetails,
};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq)]
pub enum JobPollOutcome {
    Completed(JobDetails),
    /// The job was accepted but ended `errored`
    QueueingError(JobDetails),
    /// A fetch itself failed
    RequestError(ErrorDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportPollOutcome {
    Completed(ReportDetails),
    QueueingError(ReportDetails),
    RequestError(ErrorDetails),
}

impl JobPollOutcome {
    /// The completed job, or the failure as an error
    pub fn into_result(self) -> MultiBlastResult<JobDetails> {
        match self {
            JobPollOutcome::Completed(job) => Ok(job),
            JobPollOutcome::QueueingError(job) => Err(MultiBlastError::Queueing(job.id)),
            JobPollOutcome::RequestError(details) => Err(details.into()),
        }
    }
}

impl ReportPollOutcome {
    pub fn into_result(self) -> MultiBlastResult<ReportDetails> {
        match self {
            ReportPollOutcome::Completed(report) => Ok(report),
            ReportPollOutcome::QueueingError(report) => {
                Err(MultiBlastError::Queueing(report.job_id))
            }
            ReportPollOutcome::RequestError(details) => Err(details.into()),
        }
    }
}

/// Fetch until `status` reports a terminal state or a fetch fails
pub async fn poll_until_terminal<T, F, Fut, S>(
    interval: Duration,
    mut fetch: F,
    status: S,
) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
    S: Fn(&T) -> JobStatus,
{
    let mut attempt: u64 = 0;
    loop {
        attempt += 1;
        let value = fetch().await?;
        let current = status(&value);
        if current.is_terminal() {
            return Ok(value);
        }
        debug!(attempt, status = %current, "Not finished, polling again in {:?}", interval);
        sleep(interval).await;
    }
}

pub async fn poll_job(api: &BlastApi, job_id: &str, interval: Duration) -> JobPollOutcome {
    let polled = poll_until_terminal(interval, move || api.fetch_job(job_id), |job| job.status).await;

    match polled {
        Ok(job) if job.status == JobStatus::Completed => {
            info!("Job {} completed", job.id);
            JobPollOutcome::Completed(job)
        }
        Ok(job) => {
            warn!("Job {} errored", job.id);
            JobPollOutcome::QueueingError(job)
        }
        Err(details) => JobPollOutcome::RequestError(details),
    }
}

/// Request a report of `job_id` and poll it to a terminal state
pub async fn poll_report(
    api: &BlastApi,
    job_id: &str,
    config: &ReportConfig,
    interval: Duration,
) -> ReportPollOutcome {
    let report_id = match api.create_report(job_id, config).await {
        Ok(created) => created.report_id,
        Err(details) => return ReportPollOutcome::RequestError(details),
    };
    debug!("Created {} report {} for job {}", config.format, report_id, job_id);

    let report_id = report_id.as_str();
    let polled = poll_until_terminal(
        interval,
        move || api.fetch_report(report_id),
        |report| report.status,
    )
    .await;

    match polled {
        Ok(report) if report.status == JobStatus::Completed => {
            info!("Report {} completed", report.report_id);
            ReportPollOutcome::Completed(report)
        }
        Ok(report) => {
            warn!("Report {} errored", report.report_id);
            ReportPollOutcome::QueueingError(report)
        }
        Err(details) => ReportPollOutcome::RequestError(details),
    }
}

/// A poll loop running as its own task.
///
/// Dropping the handle aborts the task, and with it the pending request and
/// timer. Awaiting it yields the loop's outcome.
#[derive(Debug)]
pub struct PollHandle<T> {
    task: JoinHandle<T>,
}

impl<T: Send + 'static> PollHandle<T> {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            task: tokio::spawn(future),
        }
    }
}

impl<T> PollHandle<T> {
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Future for PollHandle<T> {
    type Output = MultiBlastResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().task).poll(cx).map(|joined| {
            joined.map_err(|e| {
                if e.is_cancelled() {
                    MultiBlastError::Cancelled
                } else {
                    MultiBlastError::Other(e.to_string())
                }
            })
        })
    }
}

impl<T> Drop for PollHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Poll `job_id` on a background task
pub fn spawn_job_poll(api: BlastApi, job_id: String, interval: Duration) -> PollHandle<JobPollOutcome> {
    PollHandle::spawn(async move { poll_job(&api, &job_id, interval).await })
}
