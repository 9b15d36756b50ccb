use super::{read_organism_maps, Session};
use crate::cli::output;
use anyhow::Result;
use clap::Args;
use multiblast_core::MultiBlastError;
use multiblast_results::{load_result_page, ResultPageOutcome, ResultSelection, StaticOrganismMaps};
use std::path::PathBuf;

#[derive(Args)]
pub struct ResultsArgs {
    /// Job ID
    pub job_id: String,

    /// Result to show: "combined", or the 1-based index of one query
    /// (defaults to combined for multi-query jobs)
    #[arg(short, long, value_name = "SELECTION")]
    pub selection: Option<ResultSelection>,

    /// Organism map of the site (JSON object of file name → organism name)
    #[arg(long, value_name = "FILE")]
    pub organisms: PathBuf,

    /// Print only the combined result rows
    #[arg(long)]
    pub rows: bool,
}

pub async fn run(args: ResultsArgs, session: &Session) -> Result<()> {
    let organisms = StaticOrganismMaps(read_organism_maps(&args.organisms)?);

    let outcome = load_result_page(
        &session.api,
        &organisms,
        &args.job_id,
        args.selection,
        &session.config.submission.default_target_type,
        session.poll_interval(),
    )
    .await;

    let page = match outcome {
        ResultPageOutcome::Loaded(page) => page,
        ResultPageOutcome::QueueingError { job_id } => {
            return Err(MultiBlastError::Queueing(job_id).into())
        }
        ResultPageOutcome::RequestError(details) => {
            return Err(MultiBlastError::from(details).into())
        }
        ResultPageOutcome::NotFound { message } => {
            return Err(MultiBlastError::NotFound(message).into())
        }
    };

    if args.rows {
        output::print_json(&page.result.rows)
    } else {
        output::print_json(&page)
    }
}
