//! Error payloads returned by the multi-blast service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result of a call against the multi-blast service.
///
/// Failures are data, not control flow: every remote operation resolves to
/// either the decoded value or a classified [`ErrorDetails`].
pub type ApiResult<T> = Result<T, ErrorDetails>;

/// Closed taxonomy of service errors, tagged on the `status` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ErrorDetails {
    BadRequest {
        message: String,
    },
    Unauthorized {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Forbidden {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    NotFound {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    BadMethod {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Validation rejected the submitted configuration
    InvalidInput {
        errors: InvalidInputErrors,
    },
    ServerError {
        message: String,
        #[serde(rename = "requestId", default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
    /// The failure body could not be decoded; the raw message is kept verbatim
    Unknown {
        message: String,
    },
}

/// Validation messages attached to an `invalid-input` error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvalidInputErrors {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(rename = "byKey", default)]
    pub by_key: BTreeMap<String, Vec<String>>,
}

impl ErrorDetails {
    /// The wire name of this error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorDetails::BadRequest { .. } => "bad-request",
            ErrorDetails::Unauthorized { .. } => "unauthorized",
            ErrorDetails::Forbidden { .. } => "forbidden",
            ErrorDetails::NotFound { .. } => "not-found",
            ErrorDetails::BadMethod { .. } => "bad-method",
            ErrorDetails::InvalidInput { .. } => "invalid-input",
            ErrorDetails::ServerError { .. } => "server-error",
            ErrorDetails::Unknown { .. } => "unknown",
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ErrorDetails::InvalidInput { .. })
    }

    /// User-caused errors are expected; everything else goes to telemetry
    pub fn should_report(&self) -> bool {
        !self.is_invalid_input()
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDetails::BadRequest { message }
            | ErrorDetails::ServerError { message, .. }
            | ErrorDetails::Unknown { message } => Some(message),
            ErrorDetails::Unauthorized { message }
            | ErrorDetails::Forbidden { message }
            | ErrorDetails::NotFound { message }
            | ErrorDetails::BadMethod { message } => message.as_deref(),
            ErrorDetails::InvalidInput { .. } => None,
        }
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetails::InvalidInput { errors } => {
                write!(f, "invalid-input")?;
                let mut messages: Vec<String> = errors.general.clone();
                for (key, key_errors) in &errors.by_key {
                    messages.extend(key_errors.iter().map(|e| format!("{}: {}", key, e)));
                }
                if !messages.is_empty() {
                    write!(f, " ({})", messages.join("; "))?;
                }
                Ok(())
            }
            other => match other.message() {
                Some(message) => write!(f, "{}: {}", other.kind(), message),
                None => write!(f, "{}", other.kind()),
            },
        }
    }
}
