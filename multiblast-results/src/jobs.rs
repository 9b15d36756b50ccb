//! Rows of the job listing

use chrono::{DateTime, Utc};
use multiblast_core::JobSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub job_id: String,
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    pub status: String,
}

/// Primary jobs only; sub-jobs of a multi-query job are not listed
pub fn job_rows(jobs: &[JobSummary]) -> Vec<JobRow> {
    jobs.iter()
        .filter(|job| job.is_primary.unwrap_or(true))
        .map(|job| JobRow {
            job_id: job.id.clone(),
            description: job.description.clone(),
            created: job.created,
            expires: job.expires,
            status: job.status.readable().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_primary_jobs_listed() {
        let jobs: Vec<JobSummary> = serde_json::from_value(json!([
            {"id": "a", "created": "2021-03-01T10:00:00Z", "expires": "2021-03-08T10:00:00Z", "status": "in-progress"},
            {"id": "b", "description": "mine", "created": "2021-03-01T10:00:00Z", "expires": "2021-03-08T10:00:00Z", "status": "expired", "isPrimary": true},
            {"id": "c", "created": "2021-03-01T10:00:00Z", "expires": "2021-03-08T10:00:00Z", "status": "completed", "isPrimary": false}
        ]))
        .unwrap();

        let rows = job_rows(&jobs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, "Running");
        assert_eq!(rows[0].description, None);
        assert_eq!(rows[1].status, "Expired");
        assert_eq!(rows[1].description.as_deref(), Some("mine"));
    }
}
