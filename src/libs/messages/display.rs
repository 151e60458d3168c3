//! Display implementation for timesheet messages.
//!
//! All user-facing text lives here, so commands and errors only pick a
//! `Message` variant and its parameters. Messages are written in sentence
//! case; numbers of hours are always printed with a fixed precision so
//! console output stays stable across runs.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORKLOG MESSAGES ===
            Message::WorklogBooked { time_spent, issue } => format!("{} booked to issue {}", time_spent, issue),
            Message::HoursRemaining(hours) => format!("You've {:.2} hours remaining!", hours),
            Message::HoursOverbooked(hours) => format!(
                "Oops... looks like you've booked {:.2} hours more than you were supposed to!",
                hours.abs()
            ),

            // === REPORT MESSAGES ===
            Message::HistoryHeader(date) => format!("Timesheet history: ({}):", date),
            Message::WeekHeader(monday, friday) => format!("Timesheet for the week {} - {}", monday, friday),
            Message::TotalHours(hours) => format!("Total {:.1}h", hours),
            Message::MonthHeader(month) => format!("Timesheet for {}", month),

            // === CONFIGURATION MESSAGES ===
            Message::TimesheetNotSet => {
                "please export \"TIMESHEET\" with Base64 encoded Atlassian data in the following format: email:token;domain"
                    .to_string()
            }
            Message::TimesheetNotBase64 => "TIMESHEET is not Base64 encoded".to_string(),
            Message::TimesheetMalformed => "TIMESHEET must decode to email:token;domain".to_string(),

            // === VALIDATION MESSAGES ===
            Message::UsageIntro => "This tool can be used to log time spent on a specific Jira ticket on a project.".to_string(),
            Message::TicketRequired => "please provide a ticket reference. -r".to_string(),
            Message::TimeSpentRequired => "no time given. -t".to_string(),
            Message::InvalidTimeSpent(value) => format!(
                "invalid time spent '{}': use days (#d), hours (#h), or minutes (#m or #), e.g. 8h",
                value
            ),
        };
        write!(f, "{}", text)
    }
}
