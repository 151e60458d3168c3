use crate::libs::config::Credentials;
use crate::libs::datetime;
use crate::libs::error::{Result, TimesheetError};
use crate::libs::worklog::{IssueWorklogs, WorklogEntry};
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::{header::ACCEPT, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SEARCH_URL: &str = "rest/api/3/search";
const ISSUE_URL: &str = "rest/api/3/issue";
/// Page size requested from the search endpoint.
pub const MAX_RESULTS: usize = 50;

/// Worklog-date predicate of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorklogDateQuery {
    On(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl WorklogDateQuery {
    pub fn jql(&self) -> String {
        match self {
            WorklogDateQuery::On(date) => format!("worklogDate = \"{}\"", datetime::format_date(*date)),
            WorklogDateQuery::Between(start, end) => format!(
                "worklogDate >= \"{}\" AND worklogDate <= \"{}\"",
                datetime::format_date(*start),
                datetime::format_date(*end)
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JiraIssue {
    #[serde(default)]
    pub id: String,
    pub key: String,
    pub fields: JiraIssueFields,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraSearchResults {
    #[serde(default)]
    max_results: usize,
    #[serde(default)]
    total: usize,
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug)]
struct JiraWorklogs {
    #[serde(default)]
    total: usize,
    #[serde(default)]
    worklogs: Vec<JiraWorklog>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraWorklog {
    time_spent_seconds: i64,
    #[serde(deserialize_with = "datetime::deserialize_jira_datetime")]
    started: DateTime<FixedOffset>,
    author: JiraAuthor,
    comment: Option<Document>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraAuthor {
    #[serde(default)]
    email_address: String,
    #[serde(default)]
    display_name: String,
}

/// Jira rich-text document (`type: doc`) holding a worklog comment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub version: u32,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

impl Document {
    /// A document with a single paragraph of text.
    pub fn paragraph(text: &str) -> Self {
        Self {
            version: 1,
            doc_type: "doc".to_string(),
            content: vec![Node {
                node_type: "paragraph".to_string(),
                text: None,
                content: vec![Node {
                    node_type: "text".to_string(),
                    text: Some(text.to_owned()),
                    content: Vec::new(),
                }],
            }],
        }
    }

    /// Text of the first text node of the first paragraph.
    pub fn first_paragraph_text(&self) -> Option<String> {
        self.content
            .iter()
            .find(|node| node.node_type == "paragraph")
            .and_then(|paragraph| paragraph.content.iter().find_map(|node| node.text.clone()))
    }
}

/// Body of a worklog creation request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorklog {
    pub started: String,
    pub time_spent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Document>,
}

impl NewWorklog {
    pub fn new(started: &str, time_spent: &str, comment: Option<&str>) -> Self {
        Self {
            started: started.to_owned(),
            time_spent: time_spent.to_owned(),
            comment: comment.filter(|text| !text.is_empty()).map(Document::paragraph),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JiraErrorResponse {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: std::collections::BTreeMap<String, String>,
}

impl JiraErrorResponse {
    fn messages(self) -> Vec<String> {
        let mut messages = self.error_messages;
        messages.extend(self.errors.into_iter().map(|(field, message)| format!("{}: {}", field, message)));
        messages
    }
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl Jira {
    pub fn new(credentials: &Credentials) -> Self {
        let domain = credentials.domain.trim().trim_end_matches('/');
        let base_url = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_owned()
        } else {
            format!("https://{}", domain)
        };

        Self {
            client: Client::new(),
            base_url,
            email: credentials.email.clone(),
            api_token: credentials.api_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues with worklogs matching `query`, fetched page by page.
    pub async fn search_issues(&self, query: WorklogDateQuery) -> Result<Vec<JiraIssue>> {
        let url = format!("{}/{}", self.base_url, SEARCH_URL);
        let jql = query.jql();
        let mut issues: Vec<JiraIssue> = Vec::new();
        let mut start_at = 0;

        loop {
            debug!(%jql, start_at, "searching issues");
            let res = self
                .client
                .get(&url)
                .basic_auth(&self.email, Some(&self.api_token))
                .header(ACCEPT, "application/json")
                .query(&[
                    ("startAt", start_at.to_string()),
                    ("maxResults", MAX_RESULTS.to_string()),
                    ("jql", jql.clone()),
                    ("fields", "summary".to_string()),
                ])
                .send()
                .await?;

            let page: JiraSearchResults = Self::read_json(res).await?;
            let page_len = page.issues.len();
            issues.extend(page.issues);

            start_at += if page.max_results > 0 { page.max_results } else { page_len };
            if page_len == 0 || start_at >= page.total {
                debug!(total = page.total, fetched = issues.len(), "search complete");
                return Ok(issues);
            }
        }
    }

    /// Worklogs of every issue, one request per issue.
    pub async fn fetch_worklogs(&self, issues: &[JiraIssue]) -> Result<Vec<IssueWorklogs>> {
        let mut worklogs = Vec::with_capacity(issues.len());

        for issue in issues {
            let url = format!("{}/{}/{}/worklog", self.base_url, ISSUE_URL, issue.key);
            debug!(issue = %issue.key, "fetching worklogs");
            let res = self
                .client
                .get(&url)
                .basic_auth(&self.email, Some(&self.api_token))
                .header(ACCEPT, "application/json")
                .send()
                .await?;

            if res.status() != StatusCode::OK {
                let status = res.status();
                let body = res.text().await.unwrap_or_default();
                return Err(TimesheetError::remote(status, format!("worklogs of {}: {}", issue.key, body)));
            }

            let page: JiraWorklogs = Self::read_json(res).await?;
            worklogs.push(IssueWorklogs {
                key: issue.key.clone(),
                summary: issue.fields.summary.clone(),
                total: page.total,
                entries: page
                    .worklogs
                    .into_iter()
                    .map(|worklog| WorklogEntry {
                        time_spent_seconds: worklog.time_spent_seconds,
                        issue_key: issue.key.clone(),
                        started: worklog.started,
                        author_email: worklog.author.email_address,
                        author_name: worklog.author.display_name,
                        comment: worklog.comment.as_ref().and_then(Document::first_paragraph_text),
                    })
                    .collect(),
            });
        }

        Ok(worklogs)
    }

    /// Searches with `query` and fetches the worklogs of every issue found.
    pub async fn worklogs(&self, query: WorklogDateQuery) -> Result<Vec<IssueWorklogs>> {
        let issues = self.search_issues(query).await?;
        self.fetch_worklogs(&issues).await
    }

    /// Books one worklog on `issue_key`.
    pub async fn add_worklog(&self, issue_key: &str, worklog: &NewWorklog) -> Result<()> {
        let url = format!("{}/{}/{}/worklog", self.base_url, ISSUE_URL, issue_key);
        debug!(issue = issue_key, time_spent = %worklog.time_spent, started = %worklog.started, "adding worklog");
        let res = self
            .client
            .post(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(ACCEPT, "application/json")
            .json(worklog)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        let response: JiraErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        let messages = response.messages();

        if !messages.is_empty() {
            return Err(TimesheetError::Domain(messages));
        }
        if !status.is_success() {
            return Err(TimesheetError::remote(status, body));
        }

        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T> {
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(TimesheetError::remote(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}
