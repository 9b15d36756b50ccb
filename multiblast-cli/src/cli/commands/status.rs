use super::Session;
use crate::cli::output;
use anyhow::Result;
use clap::Args;
use multiblast_client::poll_job;
use multiblast_core::MultiBlastError;

#[derive(Args)]
pub struct StatusArgs {
    /// Job ID
    pub job_id: String,

    /// Poll until the job completes or errors
    #[arg(long)]
    pub wait: bool,
}

pub async fn run(args: StatusArgs, session: &Session) -> Result<()> {
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

    tracing::debug!("Job {} is {}", job.id, job.status);
    output::print_json(&job)
}
