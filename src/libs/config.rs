//! Credentials and run configuration.
//!
//! The Jira account is configured through a single environment variable,
//! `TIMESHEET`, holding the Base64 encoding of `email:apiToken;domain`:
//!
//! ```text
//! user@example.com:abcThisIsFake;example.atlassian.net
//! └──── email ───┘ └─ token ───┘ └────── domain ─────┘
//! ```
//!
//! `timesheet -e <email:token;domain>` prints the encoded value. A `.env`
//! file in the working directory is loaded before the variable is read.
//!
//! Credentials are decoded once per run and bundled with the reference date
//! into an immutable [`Config`] that every command borrows.

use super::error::{Result, TimesheetError};
use super::messages::Message;
use base64::prelude::*;
use chrono::NaiveDate;
use std::env;

pub const TIMESHEET_ENV: &str = "TIMESHEET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub api_token: String,
    pub domain: String,
}

impl Credentials {
    /// Parses the plain `email:token;domain` form.
    pub fn parse(plain: &str) -> Result<Self> {
        let (auth, domain) = plain
            .split_once(';')
            .ok_or_else(|| TimesheetError::Config(Message::TimesheetMalformed.to_string()))?;
        let (email, api_token) = auth
            .split_once(':')
            .ok_or_else(|| TimesheetError::Config(Message::TimesheetMalformed.to_string()))?;
        let domain = domain.trim_end();

        if email.is_empty() || api_token.is_empty() || domain.is_empty() {
            return Err(TimesheetError::Config(Message::TimesheetMalformed.to_string()));
        }

        Ok(Self {
            email: email.to_owned(),
            api_token: api_token.to_owned(),
            domain: domain.to_owned(),
        })
    }

    /// Decodes a Base64 `TIMESHEET` value.
    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|_| TimesheetError::Config(Message::TimesheetNotBase64.to_string()))?;
        let plain = String::from_utf8(bytes).map_err(|_| TimesheetError::Config(Message::TimesheetNotBase64.to_string()))?;
        Self::parse(&plain)
    }

    /// Reads and decodes `TIMESHEET` from the environment.
    pub fn from_env() -> Result<Self> {
        match env::var(TIMESHEET_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::decode(&raw),
            _ => Err(TimesheetError::Config(Message::TimesheetNotSet.to_string())),
        }
    }

    /// Back to the plain `email:token;domain` form.
    pub fn to_plain(&self) -> String {
        format!("{}:{};{}", self.email, self.api_token, self.domain)
    }
}

/// Base64 encoding of a plain `email:token;domain` string.
pub fn encode(plain: &str) -> String {
    BASE64_STANDARD.encode(plain.as_bytes())
}

/// Everything a command needs, built once per run.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Day the reports are computed for and worklogs are booked on.
    pub date: NaiveDate,
    /// `started` value sent with a new worklog.
    pub started: String,
}

impl Config {
    pub fn new(credentials: Credentials, date: NaiveDate, started: String) -> Self {
        Self {
            credentials,
            date,
            started,
        }
    }
}
