//! Entry filters shared by `report` and `export`, and date argument parsing.

use crate::libs::entry::EntryFilter;
use crate::libs::error::InputError;
use crate::libs::messages::Message;
use crate::libs::team::month_bounds;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only entries of this user id
    #[arg(long)]
    pub user: Option<i64>,

    /// Only entries of this project id (repeatable)
    #[arg(long = "project")]
    pub projects: Vec<i64>,

    /// Only entries of this task id
    #[arg(long)]
    pub task: Option<i64>,

    /// Only entries logged against this client id
    #[arg(long)]
    pub client: Option<i64>,

    /// Only billable entries
    #[arg(long)]
    pub billable: bool,

    /// First date, YYYY-MM-DD or `today`
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last date, YYYY-MM-DD or `today`
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    /// Without `--from` and `--to` every stored date is included.
    pub fn to_filter(&self) -> Result<EntryFilter> {
        check_range(self.from, self.to)?;

        Ok(EntryFilter {
            user_id: self.user,
            project_ids: self.projects.clone(),
            task_id: self.task,
            client_id: self.client,
            billable_only: self.billable,
            date_from: self.from,
            date_to: self.to,
        })
    }
}

/// Accepts `YYYY-MM-DD` or `today`.
pub fn parse_date(value: &str) -> Result<NaiveDate, InputError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| InputError::InvalidDate(value.to_string()))
}

pub fn check_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<()> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            msg_bail_anyhow!(Message::InvalidDateRange(from.to_string(), to.to_string()));
        }
    }
    Ok(())
}

/// The given period, defaulting to the current month for missing bounds.
pub fn period_or_current_month(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(NaiveDate, NaiveDate)> {
    let (month_start, month_end) = month_bounds(Local::now().date_naive());
    let from = from.unwrap_or(month_start);
    let to = to.unwrap_or(month_end);
    check_range(Some(from), Some(to))?;
    Ok((from, to))
}
