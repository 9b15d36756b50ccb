use super::Session;
use crate::cli::output;
use anyhow::Result;
use clap::Args;
use multiblast_core::MultiBlastError;
use multiblast_results::job_rows;

#[derive(Args)]
pub struct JobsArgs {
    /// Include sub-jobs of multi-query jobs
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: JobsArgs, session: &Session) -> Result<()> {
    let jobs = session.api.fetch_jobs().await.map_err(MultiBlastError::from)?;

    if args.all {
        output::print_json(&jobs)
    } else {
        output::print_json(&job_rows(&jobs))
    }
}
