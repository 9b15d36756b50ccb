//! Turning completed BLAST jobs into display-ready result pages

pub mod aggregate;
pub mod jobs;
pub mod page;
pub mod rows;
pub mod selection;
pub mod subjobs;

pub use aggregate::{aggregate, AggregatedResult, ResultSummary};
pub use jobs::{job_rows, JobRow};
pub use page::{
    load_result_page, OrganismMapSource, ResultPage, ResultPageOutcome, StaticOrganismMaps,
};
pub use rows::CombinedResultRow;
pub use selection::ResultSelection;
pub use subjobs::{discover_sub_jobs, fetch_sub_job_queries, IndividualQuery, SubJob};
