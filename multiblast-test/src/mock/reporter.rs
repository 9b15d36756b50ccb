use multiblast_client::{ErrorReporter, TransportError};
use multiblast_core::ErrorDetails;
use std::sync::Mutex;

/// Keeps every reported error for later inspection
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reported: Mutex<Vec<ErrorDetails>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Vec<ErrorDetails> {
        self.reported.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, _error: &TransportError, details: &ErrorDetails) {
        self.reported.lock().unwrap().push(details.clone());
    }
}
