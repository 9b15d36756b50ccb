//! Job entities of the multi-blast service

use super::BlastConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-driven lifecycle status shared by jobs and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Queued,
    #[serde(rename = "in-progress", alias = "running")]
    Running,
    Completed,
    Errored,
    Expired,
}

impl JobStatus {
    /// Only `completed` and `errored` end a poll loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Errored)
    }

    pub fn readable(&self) -> &'static str {
        match self {
            JobStatus::Queued => "Queued",
            JobStatus::Running => "Running",
            JobStatus::Completed => "Completed",
            JobStatus::Errored => "Errored",
            JobStatus::Expired => "Expired",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.readable())
    }
}

/// A BLAST target: an organism file plus the target-type suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub organism: String,
    pub target: String,
}

impl Target {
    pub fn new(organism: impl Into<String>, target_type: &str) -> Self {
        let organism = organism.into();
        let target = format!("{}{}", organism, target_type);
        Self { organism, target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentJob {
    pub id: String,
    pub index: u32,
}

/// Entry of the job listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_jobs: Option<Vec<ParentJob>>,
}

impl JobSummary {
    /// Index of this job within the given parent, when it is one of its sub-jobs
    pub fn index_within(&self, parent_id: &str) -> Option<u32> {
        self.parent_jobs
            .as_ref()?
            .iter()
            .find(|parent| parent.id == parent_id)
            .map(|parent| parent.index)
    }
}

/// Full job record returned by `GET /jobs/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub id: String,
    pub status: JobStatus,
    pub config: BlastConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub site: String,
    pub targets: Vec<Target>,
    pub config: BlastConfig,
    pub max_result_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponse {
    pub job_id: String,
}
