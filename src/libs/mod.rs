//! Core library modules for the timesheet application.
//!
//! ```text
//! Jira worklogs ─▶ worklog (filters) ─▶ bucket (week/month grids) ─▶ view ─▶ console
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use timesheet::libs::{bucket, view};
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
//! let week = bucket::aggregate_week(&[], monday, friday);
//! assert!(view::week_table(&week).ends_with("Total 0.0h\n"));
//! ```

pub mod bucket;
pub mod config;
pub mod datetime;
pub mod error;
pub mod messages;
pub mod table;
pub mod time_spent;
pub mod view;
pub mod worklog;
