use super::Session;
use crate::cli::output;
use anyhow::Result;
use clap::Args;
use multiblast_client::poll_job;
use multiblast_core::MultiBlastError;

#[derive(Args)]
pub struct RerunArgs {
    /// Job ID
    pub job_id: String,

    /// Wait for the rerun to finish and print the job
    #[arg(long)]
    pub wait: bool,
}

pub async fn run(args: RerunArgs, session: &Session) -> Result<()> {
    session
        .api
        .rerun_job(&args.job_id)
        .await
        .map_err(MultiBlastError::from)?;
    output::success(&format!("Rerunning job {}", args.job_id));

    let job = if args.wait {
        poll_job(&session.api, &args.job_id, session.poll_interval())
            .await
            .into_result()?
    } else {
        session
            .api
            .fetch_job(&args.job_id)
            .await
            .map_err(MultiBlastError::from)?
    };
    output::print_json(&job)
}
