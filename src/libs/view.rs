//! Text renderers for the reports.
//!
//! Renderers take already aggregated data and return the exact console text;
//! commands decide where it is printed.

use super::bucket::{MonthBucket, WeekBucket};
use super::datetime::{self, WorkDay};
use super::messages::Message;
use super::table::{Column, Table};
use super::worklog::IssueWorklogs;
use chrono::NaiveDate;

/// Length of a standard working day.
pub const SECONDS_IN_STANDARD_DAY: i64 = 28800;
pub const HOURS_IN_STANDARD_DAY: f64 = 8.0;

const ISSUE_COLUMN_WIDTH: usize = 15;
const DAY_COLUMN_WIDTH: usize = 10;
const WEEK_TOTAL_COLUMN_WIDTH: usize = 11;

/// Outcome of comparing the booked time with a standard day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remaining {
    Left(f64),
    /// More than a standard day was booked; the value is negative.
    Overbooked(f64),
}

impl Remaining {
    pub fn hours(&self) -> f64 {
        match self {
            Remaining::Left(hours) | Remaining::Overbooked(hours) => *hours,
        }
    }

    pub fn message(&self) -> Message {
        match self {
            Remaining::Left(hours) => Message::HoursRemaining(*hours),
            Remaining::Overbooked(hours) => Message::HoursOverbooked(*hours),
        }
    }
}

pub fn remaining_hours(total_logged: i64) -> f64 {
    datetime::seconds_to_hours(SECONDS_IN_STANDARD_DAY - total_logged)
}

pub fn remaining(total_logged: i64) -> Remaining {
    let hours = remaining_hours(total_logged);
    if hours < 0.0 {
        Remaining::Overbooked(hours)
    } else {
        Remaining::Left(hours)
    }
}

/// Detailed listing of the worklogs of one day.
pub fn history(date: NaiveDate, worklogs: &[IssueWorklogs]) -> String {
    let mut out = format!("{}\n", Message::HistoryHeader(datetime::format_date(date)));
    let mut total = 0;

    for issue in worklogs {
        for entry in &issue.entries {
            out.push_str(&format!("\t{}:\n", issue.key));
            out.push_str(&format!("\t\tSummary: {}\n", issue.summary));
            out.push_str(&format!("\t\tAuthor: {}\n", entry.author_name));
            if let Some(comment) = &entry.comment {
                out.push_str(&format!("\t\tComment: {}\n", comment));
            }
            out.push_str(&format!(
                "\t\tTime spent: {:.2}h\n\n",
                datetime::seconds_to_hours(entry.time_spent_seconds)
            ));
            total += entry.time_spent_seconds;
        }
    }

    out.push_str(&format!("{}\n", Message::TotalHours(datetime::seconds_to_hours(total))));
    out
}

fn hours_cell(seconds: i64) -> String {
    if seconds == 0 {
        String::new()
    } else {
        format!("{:.1}", datetime::seconds_to_hours(seconds))
    }
}

fn day_columns(first: Column) -> Vec<Column> {
    let mut columns = vec![first];
    columns.extend(WorkDay::ALL.iter().map(|day| Column::new(day.name(), DAY_COLUMN_WIDTH)));
    columns
}

/// Issue × work day grid followed by the week total.
pub fn week_table(week: &WeekBucket<i64>) -> String {
    let mut table = Table::new(day_columns(Column::new("Issue", ISSUE_COLUMN_WIDTH)), '-');

    for (key, days) in week.issues() {
        if week.issue_total(key) == 0 {
            continue;
        }
        let mut row = vec![key.clone()];
        row.extend(
            WorkDay::ALL
                .iter()
                .map(|day| hours_cell(days.get(day).copied().unwrap_or(0))),
        );
        table.add_row(row);
    }

    let mut out = table.render();
    out.push_str(&format!("{}\n", Message::TotalHours(datetime::seconds_to_hours(week.total()))));
    out
}

/// Week × work day grid with week totals, followed by the month total in
/// hours and in standard days.
///
/// Rows are sorted by week number alone, so a January that opens in week 53
/// of the previous ISO year lists that week last.
pub fn month_table(month: &MonthBucket) -> String {
    let mut columns = day_columns(Column::new("WK Number", DAY_COLUMN_WIDTH));
    columns.push(Column::new("WK Total(h)", WEEK_TOTAL_COLUMN_WIDTH));
    let mut table = Table::new(columns, '_');

    let mut weeks: Vec<_> = month.weeks().collect();
    weeks.sort_by_key(|(key, _)| key.number);

    for (key, days) in weeks {
        let mut row = vec![key.number.to_string()];
        let mut week_total = 0;
        for day in WorkDay::ALL {
            let seconds = days.get(&day).copied().unwrap_or(0);
            week_total += seconds;
            row.push(hours_cell(seconds));
        }
        row.push(format!("{:.1}", datetime::seconds_to_hours(week_total)));
        table.add_row(row);
    }

    let hours = datetime::seconds_to_hours(month.total());
    let mut out = table.render();
    out.push_str(&format!("{:>74}(h) | {:<12.1}|\n", "Total", hours));
    out.push_str(&format!("{:>77} |-------------|\n", ""));
    out.push_str(&format!("{:>77} | {:<12.1}|\n", "Days", hours / HOURS_IN_STANDARD_DAY));
    out.push_str(&format!("{:>78} -------------\n", ""));
    out
}
