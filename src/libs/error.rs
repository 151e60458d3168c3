//! Error model shared by the Jira client, the aggregation pipeline and the
//! commands.
//!
//! Every failure aborts the running command: nothing here is retried or
//! recovered. Commands convert these errors into `anyhow::Error` and `main`
//! prints them and exits with code `1`.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimesheetError>;

#[derive(Debug, Error)]
pub enum TimesheetError {
    /// Missing or malformed `TIMESHEET` credentials.
    #[error("configuration error: {0}")]
    Config(String),
    /// Missing required flag or badly formatted argument.
    #[error("{0}")]
    Validation(String),
    /// Transport failure or non-success HTTP status.
    #[error("{}", remote_message(.status, .message))]
    Remote { status: Option<StatusCode>, message: String },
    /// Response body that could not be decoded.
    #[error("unexpected response format: {0}")]
    ResponseFormat(String),
    /// Jira accepted the request but answered with error messages.
    #[error("Jira rejected the request: {}", .0.join("; "))]
    Domain(Vec<String>),
}

fn remote_message(status: &Option<StatusCode>, message: &str) -> String {
    match status {
        Some(status) => format!("request failed with {}: {}", status, message),
        None => format!("request failed: {}", message),
    }
}

impl TimesheetError {
    pub fn remote(status: StatusCode, message: impl Into<String>) -> Self {
        TimesheetError::Remote {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TimesheetError::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TimesheetError {
    fn from(err: reqwest::Error) -> Self {
        TimesheetError::Remote {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TimesheetError {
    fn from(err: serde_json::Error) -> Self {
        TimesheetError::ResponseFormat(err.to_string())
    }
}
