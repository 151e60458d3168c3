use crate::{
    api::{Jira, WorklogDateQuery},
    libs::{bucket, config::Config, datetime, messages::Message, view, worklog},
    msg_print,
};
use anyhow::Result;

/// Prints the Monday to Friday grid of the week containing the reference date.
pub async fn cmd(config: &Config) -> Result<()> {
    let (monday, friday) = datetime::work_week(config.date);
    let worklogs = Jira::new(&config.credentials)
        .worklogs(WorklogDateQuery::Between(monday, friday))
        .await?;
    let mine = worklog::filter_by_author(&worklogs, &config.credentials.email);
    let week = bucket::aggregate_week(&mine, monday, friday);

    msg_print!(Message::WeekHeader(
        datetime::format_date(monday),
        datetime::format_date(friday)
    ));
    print!("{}", view::week_table(&week));
    Ok(())
}
