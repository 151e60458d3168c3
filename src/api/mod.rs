//! Jira Cloud REST client.
//!
//! Reads issues and worklogs through the v3 REST API and books new worklogs.
//! Every request authenticates with the email and API token from the
//! `TIMESHEET` credentials. Requests are sent one after another and the first
//! failure aborts the command; nothing is retried.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timesheet::api::{Jira, WorklogDateQuery};
//! use timesheet::libs::config::Credentials;
//! use chrono::NaiveDate;
//!
//! # async fn run() -> timesheet::libs::error::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let jira = Jira::new(&credentials);
//! let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let worklogs = jira.worklogs(WorklogDateQuery::On(date)).await?;
//! # Ok(())
//! # }
//! ```

pub mod jira;

pub use jira::{Jira, NewWorklog, WorklogDateQuery};
