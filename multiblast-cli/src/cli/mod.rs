pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "multiblast",
    version,
    about = "Submit multi-query BLAST jobs and collect their results",
    long_about = "multiblast drives a multi-query BLAST service: it translates form parameters \
                  into job configurations, polls jobs and reports until they finish, and \
                  aggregates per-query results into one combined table. Every command prints JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to $MULTIBLAST_CONFIG or the user config directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job from form parameters
    Submit(commands::submit::SubmitArgs),

    /// Show a job's status, optionally waiting for it to finish
    Status(commands::status::StatusArgs),

    /// List primary jobs
    Jobs(commands::jobs::JobsArgs),

    /// Load the combined or an individual result of a job
    Results(commands::results::ResultsArgs),

    /// Rerun a job on the service
    Rerun(commands::rerun::RerunArgs),

    /// Render a job into a report format and download it
    Report(commands::report::ReportArgs),
}
