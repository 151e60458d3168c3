use crate::{
    api::{Jira, WorklogDateQuery},
    libs::{config::Config, view, worklog},
};
use anyhow::Result;

pub async fn cmd(config: &Config) -> Result<()> {
    let worklogs = Jira::new(&config.credentials)
        .worklogs(WorklogDateQuery::On(config.date))
        .await?;
    let mine = worklog::filter_by_author(&worklog::filter_by_date(&worklogs, config.date), &config.credentials.email);

    print!("{}", view::history(config.date, &mine));
    Ok(())
}
