//! Sub-jobs of a multi-query job and their individual queries

use futures::future::try_join_all;
use multiblast_client::BlastApi;
use multiblast_core::{ApiResult, ErrorDetails, JobSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubJob {
    pub id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualQuery {
    pub job_id: String,
    pub index: u32,
    pub query: String,
}

/// Jobs listing `job_id` among their parents, ordered by their index within
/// it. A job without children is its own only sub-job.
pub fn discover_sub_jobs(job_id: &str, jobs: &[JobSummary]) -> Vec<SubJob> {
    let mut sub_jobs: Vec<SubJob> = jobs
        .iter()
        .filter_map(|job| {
            job.index_within(job_id).map(|index| SubJob {
                id: job.id.clone(),
                index,
            })
        })
        .collect();
    sub_jobs.sort_by_key(|sub_job| sub_job.index);

    if sub_jobs.is_empty() {
        sub_jobs.push(SubJob {
            id: job_id.to_string(),
            index: 1,
        });
    }
    sub_jobs
}

/// Fetch every sub-job's query concurrently; the first failure wins
pub async fn fetch_sub_job_queries(
    api: &BlastApi,
    sub_jobs: &[SubJob],
) -> ApiResult<Vec<IndividualQuery>> {
    try_join_all(sub_jobs.iter().map(|sub_job| async move {
        let query = api.fetch_query(&sub_job.id).await?;
        Ok::<_, ErrorDetails>(IndividualQuery {
            job_id: sub_job.id.clone(),
            index: sub_job.index,
            query,
        })
    }))
    .await
}
