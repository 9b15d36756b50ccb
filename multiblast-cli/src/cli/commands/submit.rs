use super::{parse_assignment, read_organism_maps, Session};
use crate::cli::output;
use anyhow::Result;
use clap::Args;
use multiblast_client::poll_job;
use multiblast_core::{MultiBlastError, MultiBlastResult};
use multiblast_params::names::BLAST_QUERY_SEQUENCE;
use multiblast_params::{submission_from_param_values, ParamValues};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct SubmitArgs {
    /// JSON object of form parameter name → value
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Form parameter, applied after --params (can be repeated)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub param: Vec<(String, String)>,

    /// FASTA query file, used as BlastQuerySequence
    #[arg(short, long, value_name = "FILE")]
    pub query: Option<PathBuf>,

    /// Organism map of the site (JSON object of file name → organism name)
    #[arg(long, value_name = "FILE")]
    pub organisms: PathBuf,

    /// Wait for the job to finish and print it
    #[arg(long)]
    pub wait: bool,
}

fn read_param_file(path: &Path) -> MultiBlastResult<ParamValues> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        MultiBlastError::Parse(format!("{}: expected parameter name → value map: {}", path.display(), e))
    })
}

/// Form values from every source, later sources overriding earlier ones
fn collect_param_values(args: &SubmitArgs) -> MultiBlastResult<ParamValues> {
    let mut values = match &args.params {
        Some(path) => read_param_file(path)?,
        None => ParamValues::new(),
    };
    if let Some(path) = &args.query {
        values.insert(BLAST_QUERY_SEQUENCE.to_string(), std::fs::read_to_string(path)?);
    }
    values.extend(args.param.iter().cloned());
    Ok(values)
}

pub async fn run(args: SubmitArgs, session: &Session) -> Result<()> {
    let values = collect_param_values(&args)?;
    let maps = read_organism_maps(&args.organisms)?;

    let request = submission_from_param_values(
        &values,
        &maps.organisms_to_files,
        &session.config.service.site,
        session.config.submission.max_result_size,
    )
    .map_err(MultiBlastError::from)?;

    let created = session
        .api
        .create_job(&request)
        .await
        .map_err(MultiBlastError::from)?;
    output::success(&format!("Submitted job {}", created.job_id));

    if args.wait {
        output::action(&format!("Waiting for job {}", created.job_id));
        let job = poll_job(&session.api, &created.job_id, session.poll_interval())
            .await
            .into_result()?;
        output::print_json(&job)
    } else {
        output::print_json(&created)
    }
}
