//! Test utilities for the multiblast workspace
//!
//! - **Fixtures**: raw form values per tool, a two-query report, organism
//!   maps and job records
//! - **Mocks**: a scripted in-memory transport and a recording error reporter

pub mod fixtures;
pub mod mock;

pub use mock::{RecordedCall, RecordingReporter, ScriptedTransport};

pub use anyhow::{Context, Result};

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
