//! Core types shared across all multiblast crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_or_default, save_config, ClientConfig};
pub use error::{ApiResult, ErrorDetails, InvalidInputErrors, MultiBlastError, MultiBlastResult};

pub use types::{
    BlastConfig, BlastTool, BlastnConfig, BlastpConfig, BlastxConfig, CompBasedStats,
    CommonConfig, DustConfig, ScoringMatrix, SegConfig, Target, TblastnConfig, TblastxConfig,
};
pub use types::{
    BlastOutput2, CreateJobRequest, CreateJobResponse, CreateReportRequest, CreateReportResponse,
    Hit, HitDescription, Hsp, JobDetails, JobStatus, JobSummary, MultiQueryReport, ParentJob,
    QueryReport, ReportConfig, ReportDetails, ReportFormat, ReportSummary, Search, SearchResults,
    SearchTarget,
};

pub use system::{config_path, multiblast_config_dir};

/// Version information for the multiblast project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
