/// Domain types shared by the translator, the client and the aggregator
pub mod blast_config;
pub mod job;
pub mod output;
pub mod report;
pub mod tool;

pub use blast_config::{
    BlastConfig, BlastnConfig, BlastpConfig, BlastxConfig, CommonConfig, CompBasedStats,
    DustConfig, ScoringMatrix, SegConfig, TblastnConfig, TblastxConfig,
};
pub use job::{CreateJobRequest, CreateJobResponse, JobDetails, JobStatus, JobSummary, ParentJob, Target};
pub use output::{
    BlastOutput2, Hit, HitDescription, Hsp, MultiQueryReport, QueryReport, Search, SearchResults,
    SearchTarget,
};
pub use report::{
    CreateReportRequest, CreateReportResponse, ReportConfig, ReportDetails, ReportFormat,
    ReportSummary,
};
pub use tool::BlastTool;
