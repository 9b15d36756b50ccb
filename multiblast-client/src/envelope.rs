//! Classification of transport failures into [`ErrorDetails`]

use crate::error::TransportError;
use lazy_static::lazy_static;
use multiblast_core::ErrorDetails;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // Widest `{ ... }` span of the message
    static ref ERROR_PAYLOAD_REGEX: Regex = Regex::new(r"^[^{]*(\{.*\})[^}]*$").unwrap();
}

/// Receives every classified error that is not caused by user input
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &TransportError, details: &ErrorDetails);
}

/// Default reporter: logs reported errors through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &TransportError, details: &ErrorDetails) {
        tracing::error!(kind = details.kind(), "Service request failed: {}", error);
    }
}

/// The embedded JSON payload of a failure message, or the message itself
/// when it contains none
pub fn extract_error_payload(message: &str) -> Cow<'_, str> {
    ERROR_PAYLOAD_REGEX.replace(message, "$1")
}

/// Decode the payload embedded in a failure. Anything that does not decode
/// against the error schema becomes `unknown` with the raw message kept.
pub fn classify(error: &TransportError) -> ErrorDetails {
    let message = error.to_string();
    match serde_json::from_str::<ErrorDetails>(&extract_error_payload(&message)) {
        Ok(details) => details,
        Err(e) => {
            tracing::warn!("Undecodable error payload ({}): {}", e, message);
            ErrorDetails::Unknown { message }
        }
    }
}

/// Classify `error` and forward it to `reporter` unless it is an
/// `invalid-input` rejection
pub(crate) fn classify_and_report(error: &TransportError, reporter: &dyn ErrorReporter) -> ErrorDetails {
    let details = classify(error);
    if details.should_report() {
        reporter.report(error, &details);
    }
    details
}
