//! Client for the multi-blast job and report service: result envelope,
//! transport seam and lifecycle polling

pub mod api;
pub mod envelope;
pub mod error;
pub mod poll;
pub mod transport;

pub use api::BlastApi;
pub use envelope::{classify, extract_error_payload, ErrorReporter, TracingReporter};
pub use error::TransportError;
pub use poll::{
    poll_job, poll_report, poll_until_terminal, spawn_job_poll, JobPollOutcome, PollHandle,
    ReportPollOutcome, DEFAULT_POLL_INTERVAL,
};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};
