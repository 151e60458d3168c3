//! # Timesheet - Jira worklog booking and reporting
//!
//! A command-line utility that books time against Jira issues and reports
//! what the configured user has booked for a day, a work week or a month.
//!
//! ## Features
//!
//! - **Booking**: Add a worklog to an issue with an optional comment
//! - **Remaining**: Hours left of a standard 8 hour day
//! - **Reports**: Daily history, weekly and monthly grids of booked hours
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timesheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
