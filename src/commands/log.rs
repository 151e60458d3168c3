use super::remaining;
use crate::{
    api::{Jira, NewWorklog},
    libs::{config::Config, messages::Message, time_spent::TimeSpent},
    msg_success,
};
use anyhow::Result;

/// Books `time_spent` on `ticket`, then reports what is left of the day.
pub async fn cmd(config: &Config, ticket: &str, time_spent: TimeSpent, comment: Option<&str>) -> Result<()> {
    let worklog = NewWorklog::new(&config.started, &time_spent.to_string(), comment);
    Jira::new(&config.credentials).add_worklog(ticket, &worklog).await?;

    msg_success!(Message::WorklogBooked {
        time_spent: time_spent.to_string(),
        issue: ticket.to_string(),
    });

    remaining::cmd(config).await
}
