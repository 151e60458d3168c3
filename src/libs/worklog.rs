use super::datetime;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::debug;

/// A single time entry booked against an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct WorklogEntry {
    pub time_spent_seconds: i64,
    pub issue_key: String,
    pub started: DateTime<FixedOffset>,
    pub author_email: String,
    pub author_name: String,
    /// Text of the first comment paragraph, if there is one.
    pub comment: Option<String>,
}

/// Worklogs of one issue returned by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueWorklogs {
    pub key: String,
    pub summary: String,
    /// Worklog count reported by Jira for the issue.
    pub total: usize,
    pub entries: Vec<WorklogEntry>,
}

impl IssueWorklogs {
    pub fn total_seconds(&self) -> i64 {
        self.entries.iter().map(|entry| entry.time_spent_seconds).sum()
    }

    fn retain<F>(&self, keep: F) -> Option<Self>
    where
        F: Fn(&WorklogEntry) -> bool,
    {
        let entries: Vec<WorklogEntry> = self.entries.iter().filter(|entry| keep(*entry)).cloned().collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            key: self.key.clone(),
            summary: self.summary.clone(),
            total: self.total,
            entries,
        })
    }
}

/// Keeps the worklogs booked by `email`. Issues left without worklogs are dropped.
pub fn filter_by_author(worklogs: &[IssueWorklogs], email: &str) -> Vec<IssueWorklogs> {
    let filtered: Vec<IssueWorklogs> = worklogs
        .iter()
        .filter_map(|issue| issue.retain(|entry| entry.author_email == email))
        .collect();
    debug!(author = email, before = worklogs.len(), after = filtered.len(), "filtered worklogs by author");
    filtered
}

/// Keeps the worklogs started on a calendar day in `start..=end`.
pub fn filter_by_date_window(worklogs: &[IssueWorklogs], start: NaiveDate, end: NaiveDate) -> Vec<IssueWorklogs> {
    let filtered: Vec<IssueWorklogs> = worklogs
        .iter()
        .filter_map(|issue| issue.retain(|entry| datetime::is_between(&entry.started, start, end)))
        .collect();
    debug!(%start, %end, before = worklogs.len(), after = filtered.len(), "filtered worklogs by date window");
    filtered
}

/// Keeps the worklogs started on `date`.
pub fn filter_by_date(worklogs: &[IssueWorklogs], date: NaiveDate) -> Vec<IssueWorklogs> {
    worklogs
        .iter()
        .filter_map(|issue| issue.retain(|entry| datetime::is_same_day(&entry.started, date)))
        .collect()
}

pub fn total_seconds(worklogs: &[IssueWorklogs]) -> i64 {
    worklogs.iter().map(IssueWorklogs::total_seconds).sum()
}
