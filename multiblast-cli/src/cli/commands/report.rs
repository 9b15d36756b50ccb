use super::Session;
use crate::cli::output;
use anyhow::Result;
use clap::Args;
use multiblast_client::poll_report;
use multiblast_core::{MultiBlastError, ReportConfig, ReportFormat};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReportArgs {
    /// Job ID
    pub job_id: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Pairwise)]
    pub format: ReportFormat,

    /// Download the zipped report instead of its first file
    #[arg(long)]
    pub zip: bool,

    /// Only include these output fields (tabular and CSV formats)
    #[arg(long, value_delimiter = ',', value_name = "FIELD,...")]
    pub fields: Vec<String>,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub async fn run(args: ReportArgs, session: &Session) -> Result<()> {
    let mut config = ReportConfig::new(args.format);
    if !args.fields.is_empty() {
        config.fields_to_include = Some(args.fields.clone());
    }

    output::action(&format!("Rendering job {} as {}", args.job_id, args.format));
    let report = poll_report(&session.api, &args.job_id, &config, session.poll_interval())
        .await
        .into_result()?;

    let file = report.download_file(args.zip);
    let contents = session
        .api
        .download_report_file(&report.report_id, file)
        .await
        .map_err(MultiBlastError::from)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &contents).map_err(MultiBlastError::from)?;
            output::success(&format!("Wrote {} ({} bytes)", path.display(), contents.len()));
            output::print_json(&json!({
                "reportID": report.report_id,
                "jobID": report.job_id,
                "file": file,
                "output": path,
                "bytes": contents.len(),
            }))
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(&contents).map_err(MultiBlastError::from)?;
            out.flush().map_err(MultiBlastError::from)?;
            Ok(())
        }
    }
}
