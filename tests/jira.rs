#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;
    use timesheet::api::{Jira, NewWorklog, WorklogDateQuery};
    use timesheet::libs::config::Credentials;
    use timesheet::libs::error::TimesheetError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jira(server: &ServerGuard) -> Jira {
        Jira::new(&Credentials {
            email: "user@example.com".to_string(),
            api_token: "tok".to_string(),
            domain: server.url(),
        })
    }

    fn issue(key: &str) -> serde_json::Value {
        json!({ "id": "1", "key": key, "fields": { "summary": format!("Summary of {}", key) } })
    }

    fn worklogs_body(seconds: i64, started: &str, comment: Option<&str>) -> String {
        let mut worklog = json!({
            "timeSpentSeconds": seconds,
            "started": started,
            "author": { "emailAddress": "user@example.com", "displayName": "Test User" }
        });
        if let Some(text) = comment {
            worklog["comment"] = json!({
                "version": 1,
                "type": "doc",
                "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": text }] }]
            });
        }
        json!({ "total": 1, "worklogs": [worklog] }).to_string()
    }

    #[test]
    fn test_jql() {
        assert_eq!(WorklogDateQuery::On(date(2024, 3, 4)).jql(), "worklogDate = \"2024-03-04\"");
        assert_eq!(
            WorklogDateQuery::Between(date(2024, 3, 4), date(2024, 3, 8)).jql(),
            "worklogDate >= \"2024-03-04\" AND worklogDate <= \"2024-03-08\""
        );
    }

    #[test]
    fn test_base_url() {
        let credentials = Credentials::parse("user@example.com:tok;example.atlassian.net/").unwrap();
        assert_eq!(Jira::new(&credentials).base_url(), "https://example.atlassian.net");
    }

    #[test]
    fn test_new_worklog_body() {
        let body = serde_json::to_value(NewWorklog::new("2024-03-04T09:00:00.000+0000", "2h", Some("Code review"))).unwrap();
        assert_eq!(
            body,
            json!({
                "started": "2024-03-04T09:00:00.000+0000",
                "timeSpent": "2h",
                "comment": {
                    "version": 1,
                    "type": "doc",
                    "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Code review" }] }]
                }
            })
        );

        let without_comment = serde_json::to_value(NewWorklog::new("2024-03-04T09:00:00.000+0000", "2h", None)).unwrap();
        assert!(without_comment.get("comment").is_none());
    }

    #[tokio::test]
    async fn test_search_issues_paginates() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("startAt".into(), "0".into()),
                Matcher::UrlEncoded("maxResults".into(), "50".into()),
                Matcher::UrlEncoded("jql".into(), "worklogDate = \"2024-03-04\"".into()),
                Matcher::UrlEncoded("fields".into(), "summary".into()),
            ]))
            .match_header("authorization", Matcher::Regex("^Basic ".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "startAt": 0, "maxResults": 2, "total": 3, "issues": [issue("ABC-1"), issue("ABC-2")] }).to_string())
            .create_async()
            .await;
        let second = server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::UrlEncoded("startAt".into(), "2".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "startAt": 2, "maxResults": 2, "total": 3, "issues": [issue("ABC-3")] }).to_string())
            .create_async()
            .await;

        let issues = jira(&server).search_issues(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap();

        let keys: Vec<&str> = issues.iter().map(|issue| issue.key.as_str()).collect();
        assert_eq!(keys, vec!["ABC-1", "ABC-2", "ABC-3"]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_issues_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({ "startAt": 0, "maxResults": 50, "total": 0, "issues": [] }).to_string())
            .expect(1)
            .create_async()
            .await;

        let issues = jira(&server).search_issues(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap();

        assert!(issues.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_issues_remote_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let err = jira(&server).search_issues(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap_err();

        assert!(matches!(err, TimesheetError::Remote { .. }));
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_search_issues_malformed_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = jira(&server).search_issues(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap_err();
        assert!(matches!(err, TimesheetError::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_worklogs() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({ "startAt": 0, "maxResults": 50, "total": 2, "issues": [issue("ABC-1"), issue("ABC-2")] }).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/rest/api/3/issue/ABC-1/worklog")
            .with_status(200)
            .with_body(worklogs_body(5400, "2024-03-04T09:00:00.000+0000", Some("Code review")))
            .create_async()
            .await;
        server
            .mock("GET", "/rest/api/3/issue/ABC-2/worklog")
            .with_status(200)
            .with_body(worklogs_body(1800, "2024-03-04T13:00:00.000+0100", None))
            .create_async()
            .await;

        let worklogs = jira(&server).worklogs(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap();

        assert_eq!(worklogs.len(), 2);
        assert_eq!(worklogs[0].key, "ABC-1");
        assert_eq!(worklogs[0].summary, "Summary of ABC-1");
        assert_eq!(worklogs[0].total, 1);
        let entry = &worklogs[0].entries[0];
        assert_eq!(entry.time_spent_seconds, 5400);
        assert_eq!(entry.issue_key, "ABC-1");
        assert_eq!(entry.author_email, "user@example.com");
        assert_eq!(entry.author_name, "Test User");
        assert_eq!(entry.comment.as_deref(), Some("Code review"));
        assert_eq!(worklogs[1].entries[0].comment, None);
    }

    #[tokio::test]
    async fn test_fetch_worklogs_non_ok_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({ "startAt": 0, "maxResults": 50, "total": 1, "issues": [issue("ABC-1")] }).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/rest/api/3/issue/ABC-1/worklog")
            .with_status(404)
            .with_body("Issue does not exist")
            .create_async()
            .await;

        let err = jira(&server).worklogs(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap_err();

        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("ABC-1"));
    }

    #[tokio::test]
    async fn test_fetch_worklogs_bad_timestamp() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/api/3/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({ "startAt": 0, "maxResults": 50, "total": 1, "issues": [issue("ABC-1")] }).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/rest/api/3/issue/ABC-1/worklog")
            .with_status(200)
            .with_body(worklogs_body(600, "yesterday", None))
            .create_async()
            .await;

        let err = jira(&server).worklogs(WorklogDateQuery::On(date(2024, 3, 4))).await.unwrap_err();
        assert!(matches!(err, TimesheetError::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_add_worklog() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/api/3/issue/ABC-1/worklog")
            .match_header("authorization", Matcher::Regex("^Basic ".into()))
            .match_body(Matcher::PartialJson(json!({
                "started": "2024-03-04T09:00:00.000+0000",
                "timeSpent": "2h",
                "comment": { "type": "doc", "version": 1 }
            })))
            .with_status(201)
            .with_body(json!({ "id": "10001", "timeSpentSeconds": 7200 }).to_string())
            .create_async()
            .await;

        let worklog = NewWorklog::new("2024-03-04T09:00:00.000+0000", "2h", Some("Code review"));
        jira(&server).add_worklog("ABC-1", &worklog).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_worklog_domain_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/rest/api/3/issue/ABC-1/worklog")
            .with_status(400)
            .with_body(
                json!({
                    "errorMessages": ["Worklog must not be null."],
                    "errors": { "timeLogged": "You must indicate the time spent working." }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let worklog = NewWorklog::new("2024-03-04T09:00:00.000+0000", "2h", None);
        let err = jira(&server).add_worklog("ABC-1", &worklog).await.unwrap_err();

        match err {
            TimesheetError::Domain(messages) => assert_eq!(
                messages,
                vec![
                    "Worklog must not be null.".to_string(),
                    "timeLogged: You must indicate the time spent working.".to_string()
                ]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_worklog_remote_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/rest/api/3/issue/ABC-1/worklog")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let worklog = NewWorklog::new("2024-03-04T09:00:00.000+0000", "2h", None);
        let err = jira(&server).add_worklog("ABC-1", &worklog).await.unwrap_err();

        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    }
}
