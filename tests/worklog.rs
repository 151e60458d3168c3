#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timesheet::libs::datetime;
    use timesheet::libs::worklog::{self, IssueWorklogs, WorklogEntry};

    fn entry(email: &str, started: &str, seconds: i64) -> WorklogEntry {
        WorklogEntry {
            time_spent_seconds: seconds,
            issue_key: "ABC-1".to_string(),
            started: datetime::parse_jira_datetime(started).unwrap(),
            author_email: email.to_string(),
            author_name: email.to_string(),
            comment: None,
        }
    }

    fn worklogs() -> Vec<IssueWorklogs> {
        vec![
            IssueWorklogs {
                key: "ABC-1".to_string(),
                summary: "Mine and theirs".to_string(),
                total: 3,
                entries: vec![
                    entry("me@example.com", "2024-03-04T09:00:00.000+0000", 3600),
                    entry("them@example.com", "2024-03-04T10:00:00.000+0000", 7200),
                    entry("me@example.com", "2024-03-05T09:00:00.000+0000", 1800),
                ],
            },
            IssueWorklogs {
                key: "ABC-2".to_string(),
                summary: "Theirs only".to_string(),
                total: 1,
                entries: vec![entry("them@example.com", "2024-03-04T09:00:00.000+0000", 600)],
            },
        ]
    }

    #[test]
    fn test_filter_by_author_drops_empty_issues() {
        let mine = worklog::filter_by_author(&worklogs(), "me@example.com");

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].key, "ABC-1");
        assert_eq!(mine[0].entries.len(), 2);
        assert_eq!(worklog::total_seconds(&mine), 5400);
    }

    #[test]
    fn test_filter_by_author_is_exact() {
        assert!(worklog::filter_by_author(&worklogs(), "ME@example.com").is_empty());
    }

    #[test]
    fn test_filter_by_date() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let filtered = worklog::filter_by_date(&worklogs(), monday);

        assert_eq!(filtered.len(), 2);
        assert_eq!(worklog::total_seconds(&filtered), 3600 + 7200 + 600);
    }

    #[test]
    fn test_filter_by_date_window() {
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let filtered = worklog::filter_by_date_window(&worklogs(), tuesday, tuesday);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].total_seconds(), 1800);
    }
}
