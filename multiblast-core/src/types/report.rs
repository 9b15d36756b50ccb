//! Report entities derived from completed jobs

use super::JobStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output formats the service can render a job into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    Pairwise,
    QueryAnchoredWithIdentities,
    QueryAnchoredNoIdentities,
    FlatQueryAnchoredWithIdentities,
    FlatQueryAnchoredNoIdentities,
    Xml,
    Tabular,
    TabularWithComments,
    SeqalignText,
    SeqalignBinary,
    Csv,
    Asn1,
    SeqalignJson,
    MultiFileBlastJson,
    MultiFileBlastXml2,
    Sam,
    OrganismReport,
    SingleFileBlastJson,
    SingleFileBlastXml2,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        f.write_str(value.as_str().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub format: ReportFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_to_include: Option<Vec<String>>,
}

impl ReportConfig {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            fields_to_include: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReportRequest {
    #[serde(rename = "jobID")]
    pub job_id: String,
    #[serde(flatten)]
    pub config: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReportResponse {
    #[serde(rename = "reportID")]
    pub report_id: String,
}

/// Entry of the report listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "reportID")]
    pub report_id: String,
    #[serde(rename = "jobID")]
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full report record returned by `GET /reports/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetails {
    #[serde(rename = "reportID")]
    pub report_id: String,
    #[serde(rename = "jobID")]
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ReportConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

impl ReportDetails {
    /// Choose the file to download: `meta.json` and archives are skipped
    /// unless zipping was requested or nothing else is available
    pub fn download_file(&self, should_zip: bool) -> &str {
        let first_plain = self
            .files
            .iter()
            .flatten()
            .find(|file| file.as_str() != "meta.json" && !file.ends_with(".zip"));

        match first_plain {
            Some(file) if !should_zip => file.as_str(),
            _ => "report.zip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_with_files(files: &[&str]) -> ReportDetails {
        ReportDetails {
            report_id: "r1".to_string(),
            job_id: "j1".to_string(),
            status: JobStatus::Completed,
            config: None,
            description: None,
            files: Some(files.iter().map(|f| f.to_string()).collect()),
        }
    }

    #[test]
    fn test_create_report_request_shape() {
        let request = CreateReportRequest {
            job_id: "j1".to_string(),
            config: ReportConfig::new(ReportFormat::SingleFileBlastJson),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"jobID": "j1", "format": "single-file-blast-json"})
        );
    }

    #[test]
    fn test_download_file_selection() {
        let report = report_with_files(&["meta.json", "report.zip", "report.txt"]);
        assert_eq!(report.download_file(false), "report.txt");
        assert_eq!(report.download_file(true), "report.zip");

        let only_archive = report_with_files(&["meta.json", "report.zip"]);
        assert_eq!(only_archive.download_file(false), "report.zip");

        let mut no_files = report_with_files(&[]);
        no_files.files = None;
        assert_eq!(no_files.download_file(false), "report.zip");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::MultiFileBlastXml2.to_string(), "multi-file-blast-xml2");
        assert_eq!(ReportFormat::Asn1.to_string(), "asn1");
    }
}
