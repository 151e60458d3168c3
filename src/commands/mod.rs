//! Command-line entry point.
//!
//! The tool keeps the single-dash flags it has always had:
//!
//! ```text
//! timesheet -r ABC-1 -t 2h [-d 2024-03-04] [-m "Code review"]   book time
//! timesheet -remaining | -history | -week | -month [-d DATE]   reports
//! timesheet -e email:token;domain                               encode credentials
//! ```
//!
//! Multi-letter single-dash flags are rewritten to their `--long` form before
//! `clap` sees them, so both spellings work.

pub mod encode;
pub mod history;
pub mod log;
pub mod month;
pub mod remaining;
pub mod week;

use crate::libs::config::{Config, Credentials};
use crate::libs::datetime;
use crate::libs::error::TimesheetError;
use crate::libs::messages::Message;
use crate::libs::time_spent::TimeSpent;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;

/// Flags that are spelled with a single dash on the command line.
const LONG_FLAGS: [&str; 6] = ["remaining", "history", "week", "month", "help", "version"];
/// Short flags whose next argument is their value.
const VALUE_FLAGS: [&str; 5] = ["-r", "-t", "-d", "-m", "-e"];

#[derive(Debug, Parser)]
#[command(name = "timesheet", author, about, long_about = None)]
pub struct Cli {
    #[arg(short = 'r', value_name = "TICKET", help = "REQUIRED: Jira ticket reference. E.g. DDSP-4")]
    ticket: Option<String>,

    #[arg(
        short = 't',
        value_name = "DURATION",
        help = "REQUIRED: The time spent as days (#d), hours (#h), or minutes (#m or #). E.g. 8h"
    )]
    time_spent: Option<String>,

    #[arg(
        short = 'd',
        value_name = "DATE",
        allow_hyphen_values = true,
        help = "OPTIONAL: The date in YYYY-MM-DD format, or +N/-N days from today. Default today"
    )]
    date: Option<String>,

    #[arg(
        short = 'm',
        value_name = "COMMENT",
        allow_hyphen_values = true,
        help = "OPTIONAL: A comment about the worklog"
    )]
    comment: Option<String>,

    #[arg(
        short = 'e',
        value_name = "CREDENTIALS",
        help = "HELP: Base64 encode the given credentials. Format: email:token;domain. e.g. example@example.com:abcThisIsFake;xyz.atlassian.net"
    )]
    encode: Option<String>,

    #[arg(long, help = "Print the hours remaining for the day")]
    remaining: bool,

    #[arg(long, help = "Print the timesheet of the day")]
    history: bool,

    #[arg(long, help = "Print the timesheet of the week")]
    week: bool,

    #[arg(long, help = "Print the timesheet of the month")]
    month: bool,

    #[arg(short = 'v', long = "version", help = "Print version")]
    version: bool,
}

/// What a run does, decided from the flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Remaining,
    History,
    Week,
    Month,
    Log {
        ticket: String,
        time_spent: TimeSpent,
        comment: Option<String>,
    },
}

/// Rewrites `-remaining` style flags to `--remaining`. Arguments after `--`
/// and values of other flags are left alone.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    let mut value_next = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if value_next {
                value_next = false;
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            if VALUE_FLAGS.contains(&arg.as_str()) {
                value_next = true;
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(name) if !name.starts_with('-') && LONG_FLAGS.contains(&name) => format!("-{}", arg),
                _ => arg,
            }
        })
        .collect()
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let Some(cli) = Self::parse_args(std::env::args())? else {
            return Ok(());
        };
        cli.run().await
    }

    /// Parses the raw process arguments. Returns `Ok(None)` after help has
    /// been printed.
    pub fn parse_args<I>(args: I) -> std::result::Result<Option<Self>, TimesheetError>
    where
        I: IntoIterator<Item = String>,
    {
        match Self::try_parse_from(normalize_args(args)) {
            Ok(cli) => Ok(Some(cli)),
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                msg_print!(Message::UsageIntro);
                let _ = err.print();
                Ok(None)
            }
            Err(err) => Err(TimesheetError::Validation(err.to_string().trim_end().to_string())),
        }
    }

    pub async fn run(self) -> Result<()> {
        if self.version {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        if let Some(plain) = &self.encode {
            return encode::cmd(plain);
        }

        let action = self.action()?;
        let credentials = Credentials::from_env()?;
        msg_debug!(format!("Using Jira at {} as {}", credentials.domain, credentials.email));
        let config = self.config(credentials)?;

        match action {
            Action::Remaining => remaining::cmd(&config).await,
            Action::History => history::cmd(&config).await,
            Action::Week => week::cmd(&config).await,
            Action::Month => month::cmd(&config).await,
            Action::Log {
                ticket,
                time_spent,
                comment,
            } => log::cmd(&config, &ticket, time_spent, comment.as_deref()).await,
        }
    }

    /// Picks the action. Reports win over booking, in the order
    /// remaining, history, week, month.
    pub fn action(&self) -> std::result::Result<Action, TimesheetError> {
        if self.remaining {
            return Ok(Action::Remaining);
        }
        if self.history {
            return Ok(Action::History);
        }
        if self.week {
            return Ok(Action::Week);
        }
        if self.month {
            return Ok(Action::Month);
        }

        let ticket = match self.ticket.as_deref().map(str::trim) {
            Some(ticket) if !ticket.is_empty() => ticket.to_string(),
            _ => return Err(TimesheetError::Validation(Message::TicketRequired.to_string())),
        };
        let time_spent: TimeSpent = match self.time_spent.as_deref() {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => return Err(TimesheetError::Validation(Message::TimeSpentRequired.to_string())),
        };

        Ok(Action::Log {
            ticket,
            time_spent,
            comment: self.comment.clone(),
        })
    }

    /// Builds the run configuration. `-d` moves the reference date and books
    /// worklogs at a fixed 09:00 start.
    pub fn config(&self, credentials: Credentials) -> std::result::Result<Config, TimesheetError> {
        let today = Local::now().date_naive();
        match &self.date {
            Some(input) => {
                let date = datetime::parse_date(input, today)?;
                Ok(Config::new(credentials, date, datetime::fixed_start(date)))
            }
            None => Ok(Config::new(credentials, today, datetime::now_start())),
        }
    }
}
