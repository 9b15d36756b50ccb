//! Mock implementations of the client seams

mod reporter;
mod transport;

pub use reporter::RecordingReporter;
pub use transport::{RecordedCall, ScriptedTransport};
