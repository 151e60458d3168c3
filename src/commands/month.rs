use crate::{
    api::{Jira, WorklogDateQuery},
    libs::{bucket, config::Config, datetime, messages::Message, view, worklog},
    msg_print,
};
use anyhow::Result;

/// Prints the week by week grid of the month containing the reference date.
pub async fn cmd(config: &Config) -> Result<()> {
    let (first, last) = datetime::month_bounds(config.date);
    let worklogs = Jira::new(&config.credentials)
        .worklogs(WorklogDateQuery::Between(first, last))
        .await?;
    let mine = worklog::filter_by_author(&worklogs, &config.credentials.email);
    let month = bucket::aggregate_month(&mine, config.date);

    msg_print!(Message::MonthHeader(config.date.format("%B %Y").to_string()));
    print!("{}", view::month_table(&month));
    Ok(())
}
