//! Week and month buckets built from filtered worklogs.
//!
//! A week bucket maps issue key → work day → cell. Right after bucketing a
//! cell holds the seconds of every worklog booked that day (`Vec<i64>`);
//! `sum_cells` collapses each cell into a single total (`i64`). Both steps,
//! and `fill_gaps`, return new buckets and leave their input untouched.
//!
//! ## Pipeline
//!
//! ```text
//! worklogs ─▶ filter_by_author ─▶ filter_by_date_window ─▶ bucket_by_weekday
//!                                                              │
//!                                   WeekBucket<i64> ◀─ sum_cells ◀─ fill_gaps
//! ```
//!
//! A month bucket runs the same pipeline once per ISO week of the month and
//! keeps the per-day totals of every week together with the month total.

use super::datetime::{self, WeekKey, WorkDay};
use super::worklog::{filter_by_date_window, IssueWorklogs};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Value stored for one issue on one work day.
pub trait Cell: Clone {
    /// Placeholder inserted for a day without worklogs.
    fn zero() -> Self;
    fn total(&self) -> i64;
}

impl Cell for Vec<i64> {
    fn zero() -> Self {
        vec![0]
    }

    fn total(&self) -> i64 {
        self.iter().sum()
    }
}

impl Cell for i64 {
    fn zero() -> Self {
        0
    }

    fn total(&self) -> i64 {
        *self
    }
}

pub type DayCells<C> = BTreeMap<WorkDay, C>;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket<C> {
    issues: BTreeMap<String, DayCells<C>>,
}

impl<C> Default for WeekBucket<C> {
    fn default() -> Self {
        Self { issues: BTreeMap::new() }
    }
}

impl<C: Cell> WeekBucket<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, issue_key: &str, day: WorkDay, cell: C) {
        self.issues.entry(issue_key.to_owned()).or_default().insert(day, cell);
    }

    pub fn get(&self, issue_key: &str) -> Option<&DayCells<C>> {
        self.issues.get(issue_key)
    }

    /// Issues in key order.
    pub fn issues(&self) -> impl Iterator<Item = (&String, &DayCells<C>)> {
        self.issues.iter()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_total(&self, issue_key: &str) -> i64 {
        self.issues
            .get(issue_key)
            .map(|days| days.values().map(Cell::total).sum())
            .unwrap_or(0)
    }

    pub fn day_total(&self, day: WorkDay) -> i64 {
        self.issues.values().filter_map(|days| days.get(&day)).map(Cell::total).sum()
    }

    pub fn total(&self) -> i64 {
        self.issues.values().flat_map(|days| days.values()).map(Cell::total).sum()
    }
}

/// Groups the seconds of every worklog by issue and by the work day it was
/// started on. Weekend worklogs are skipped.
pub fn bucket_by_weekday(worklogs: &[IssueWorklogs]) -> WeekBucket<Vec<i64>> {
    let mut bucket: WeekBucket<Vec<i64>> = WeekBucket::new();

    for issue in worklogs {
        for entry in &issue.entries {
            let weekday = datetime::weekday_of(&entry.started);
            match WorkDay::from_weekday(weekday) {
                Some(day) => bucket
                    .issues
                    .entry(issue.key.clone())
                    .or_default()
                    .entry(day)
                    .or_default()
                    .push(entry.time_spent_seconds),
                None => debug!(issue = %issue.key, %weekday, "skipping weekend worklog"),
            }
        }
    }

    bucket
}

/// Returns a copy of `bucket` where every issue has a cell for each of
/// Monday to Friday.
pub fn fill_gaps<C: Cell>(bucket: &WeekBucket<C>) -> WeekBucket<C> {
    let mut filled = bucket.clone();
    for days in filled.issues.values_mut() {
        for day in WorkDay::ALL {
            days.entry(day).or_insert_with(C::zero);
        }
    }
    filled
}

/// Collapses every cell into its total.
pub fn sum_cells<C: Cell>(bucket: &WeekBucket<C>) -> WeekBucket<i64> {
    WeekBucket {
        issues: bucket
            .issues
            .iter()
            .map(|(key, days)| (key.clone(), days.iter().map(|(day, cell)| (*day, cell.total())).collect()))
            .collect(),
    }
}

/// Filters the worklogs to `start..=end`, buckets them by work day, fills the
/// gaps and sums the cells.
pub fn aggregate_week(worklogs: &[IssueWorklogs], start: NaiveDate, end: NaiveDate) -> WeekBucket<i64> {
    let in_window = filter_by_date_window(worklogs, start, end);
    sum_cells(&fill_gaps(&bucket_by_weekday(&in_window)))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthBucket {
    weeks: BTreeMap<WeekKey, DayCells<i64>>,
    total: i64,
}

impl MonthBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the per-day totals of one week and grows the month total.
    pub fn insert_week(&mut self, key: WeekKey, week: &WeekBucket<i64>) {
        let days: DayCells<i64> = WorkDay::ALL.iter().map(|day| (*day, week.day_total(*day))).collect();
        self.total += week.total();
        let slot = self.weeks.entry(key).or_default();
        for (day, seconds) in days {
            *slot.entry(day).or_insert(0) += seconds;
        }
    }

    /// Weeks ordered by ISO year, then week number.
    pub fn weeks(&self) -> impl Iterator<Item = (&WeekKey, &DayCells<i64>)> {
        self.weeks.iter()
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// Runs the week pipeline for every week of the month containing `date`.
pub fn aggregate_month(worklogs: &[IssueWorklogs], date: NaiveDate) -> MonthBucket {
    let mut month = MonthBucket::new();
    for (key, (start, end)) in datetime::month_weeks(date) {
        let week = aggregate_week(worklogs, start, end);
        debug!(week = key.number, %start, %end, seconds = week.total(), "aggregated week");
        month.insert_week(key, &week);
    }
    month
}
