//! Calendar helpers used by the reports.
//!
//! Jira writes worklog start times as `2024-03-04T09:00:00.000+0000`. The
//! reports work on the wall-clock date and time exactly as written in that
//! string: the offset is parsed but never applied, so a worklog booked on
//! Monday is counted on Monday whatever the local timezone of the reader.
//!
//! Only Monday to Friday is tracked. A work week is the Monday..Friday span of
//! the ISO week that contains the reference date, and a month is split into
//! such spans clipped to the month.

use super::error::{Result, TimesheetError};
use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const JIRA_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";
/// Start time used when a worklog is booked for an explicit date.
pub const FIXED_START_TIME: &str = "09:00:00.000+0000";
pub const SECONDS_IN_HOUR: f64 = 3600.0;

/// A tracked day of the week. Weekends are never tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl WorkDay {
    pub const ALL: [WorkDay; 5] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
    ];

    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(WorkDay::Monday),
            Weekday::Tue => Some(WorkDay::Tuesday),
            Weekday::Wed => Some(WorkDay::Wednesday),
            Weekday::Thu => Some(WorkDay::Thursday),
            Weekday::Fri => Some(WorkDay::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    /// English name, as used in the table headers.
    pub fn name(&self) -> &'static str {
        match self {
            WorkDay::Monday => "Monday",
            WorkDay::Tuesday => "Tuesday",
            WorkDay::Wednesday => "Wednesday",
            WorkDay::Thursday => "Thursday",
            WorkDay::Friday => "Friday",
        }
    }
}

impl std::fmt::Display for WorkDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a `-d` argument: `YYYY-MM-DD`, or `+N`/`-N` days relative to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if let Some(days) = input.strip_prefix('+') {
        return shift_days(today, days, 1, input);
    }
    if let Some(days) = input.strip_prefix('-') {
        return shift_days(today, days, -1, input);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        TimesheetError::Validation(format!(
            "provided date '{}' didn't match the expected YYYY-MM-DD format, try -h for help",
            input
        ))
    })
}

fn shift_days(today: NaiveDate, days: &str, sign: i64, input: &str) -> Result<NaiveDate> {
    let days: i64 = days
        .parse()
        .map_err(|_| TimesheetError::Validation(format!("invalid relative date '{}'", input)))?;
    sign.checked_mul(days)
        .and_then(Duration::try_days)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| TimesheetError::Validation(format!("relative date '{}' is out of range", input)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a Jira timestamp such as `2024-03-04T09:00:00.000+0000`.
pub fn parse_jira_datetime(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(input, JIRA_DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(input))
        .map_err(|err| TimesheetError::ResponseFormat(format!("invalid timestamp '{}': {}", input, err)))
}

pub fn deserialize_jira_datetime<'de, D>(deserializer: D) -> std::result::Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_jira_datetime(&raw).map_err(serde::de::Error::custom)
}

/// Formats a timestamp the way Jira expects the `started` field.
pub fn format_jira_datetime<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(JIRA_DATETIME_FORMAT).to_string()
}

/// `started` value for a worklog booked on an explicit date.
pub fn fixed_start(date: NaiveDate) -> String {
    format!("{}T{}", format_date(date), FIXED_START_TIME)
}

/// `started` value for a worklog booked now.
pub fn now_start() -> String {
    format_jira_datetime(&Local::now())
}

/// Wall-clock time of a worklog, offset ignored.
pub fn wall_clock(datetime: &DateTime<FixedOffset>) -> NaiveDateTime {
    datetime.naive_local()
}

/// True when the wall-clock time falls on a calendar day in `start..=end`.
///
/// Midnight at the start of `start` and `23:59:59` of `end` are both inside
/// the window, as is any fraction of the last second.
pub fn is_between(datetime: &DateTime<FixedOffset>, start: NaiveDate, end: NaiveDate) -> bool {
    let day = wall_clock(datetime).date();
    start <= day && day <= end
}

pub fn is_same_day(datetime: &DateTime<FixedOffset>, date: NaiveDate) -> bool {
    wall_clock(datetime).date() == date
}

pub fn weekday_of(datetime: &DateTime<FixedOffset>) -> Weekday {
    wall_clock(datetime).weekday()
}

pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_IN_HOUR
}

/// Monday and Friday of the ISO week containing `date`.
pub fn work_week(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(4))
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month.map(|next| next - Duration::days(1)).unwrap_or(first);
    (first, last)
}

/// ISO week identity. Keys order by ISO year first, then week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub number: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            number: iso.week(),
        }
    }
}

/// Splits the month containing `date` into Monday..Friday spans clipped to
/// the month. Weeks whose work days all fall outside the month are left out.
pub fn month_weeks(date: NaiveDate) -> BTreeMap<WeekKey, (NaiveDate, NaiveDate)> {
    let (first, last) = month_bounds(date);
    let mut weeks: BTreeMap<WeekKey, (NaiveDate, NaiveDate)> = BTreeMap::new();

    for day in first.iter_days().take_while(|day| *day <= last) {
        if WorkDay::from_weekday(day.weekday()).is_none() {
            continue;
        }
        weeks
            .entry(WeekKey::of(day))
            .and_modify(|span| span.1 = day)
            .or_insert((day, day));
    }

    weeks
}
