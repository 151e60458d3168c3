use crate::{
    api::{Jira, WorklogDateQuery},
    libs::{
        config::Config,
        view::{self, Remaining},
        worklog,
    },
    msg_print, msg_warning,
};
use anyhow::Result;

/// Prints how much of a standard day is left to book on the reference date.
pub async fn cmd(config: &Config) -> Result<()> {
    let worklogs = Jira::new(&config.credentials)
        .worklogs(WorklogDateQuery::On(config.date))
        .await?;
    let mine = worklog::filter_by_author(&worklog::filter_by_date(&worklogs, config.date), &config.credentials.email);

    let remaining = view::remaining(worklog::total_seconds(&mine));
    match remaining {
        Remaining::Left(_) => msg_print!(remaining.message()),
        Remaining::Overbooked(_) => msg_warning!(remaining.message()),
    }

    Ok(())
}
