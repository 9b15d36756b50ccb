use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::commands::Session;
use crate::cli::{Cli, Commands};
use multiblast_core::MultiBlastError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then MULTIBLAST_LOG, then the verbosity flag
    let log_level = std::env::var("MULTIBLAST_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<MultiBlastError>() {
            Some(MultiBlastError::Configuration(_)) => 2,
            Some(MultiBlastError::Io(_)) => 3,
            Some(MultiBlastError::Parse(_)) | Some(MultiBlastError::Serialization(_)) => 4,
            Some(MultiBlastError::Network(_)) => 5,
            Some(MultiBlastError::InvalidInput(_)) => 6,
            Some(MultiBlastError::NotFound(_)) => 7,
            Some(MultiBlastError::Request(_)) => 8,
            Some(MultiBlastError::Queueing(_)) => 9,
            Some(MultiBlastError::Cancelled) => 130,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::open(cli.config.as_deref())?;
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        match cli.command {
            Commands::Submit(args) => crate::cli::commands::submit::run(args, &session).await,
            Commands::Status(args) => crate::cli::commands::status::run(args, &session).await,
            Commands::Jobs(args) => crate::cli::commands::jobs::run(args, &session).await,
            Commands::Results(args) => crate::cli::commands::results::run(args, &session).await,
            Commands::Rerun(args) => crate::cli::commands::rerun::run(args, &session).await,
            Commands::Report(args) => crate::cli::commands::report::run(args, &session).await,
        }
    })
}
