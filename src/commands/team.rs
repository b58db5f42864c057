//! Team hours summary.

use super::filters::{parse_date, period_or_current_month};
use crate::{
    db::{
        entries::Entries,
        projects::{Projects, HOLIDAY_PROJECT_PATTERNS, LEAVE_PROJECT_PATTERNS},
        users::Users,
    },
    libs::{
        entry::EntryFilter,
        messages::Message,
        team::{SpecialProjects, TeamSummary},
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct TeamArgs {
    /// First date, defaults to the start of the current month
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Last date, defaults to the end of the current month
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Only these user ids (repeatable)
    #[arg(long = "user")]
    users: Vec<i64>,
}

pub fn cmd(args: TeamArgs) -> Result<()> {
    let (from, to) = period_or_current_month(args.from, args.to)?;

    let mut users = Users::new()?.fetch_active()?;
    if !args.users.is_empty() {
        users.retain(|user| args.users.contains(&user.id));
    }
    if users.is_empty() {
        msg_warning!(Message::NoUsersFound);
        return Ok(());
    }

    let projects = Projects::new()?;
    let special = SpecialProjects {
        leave: projects.find_by_name_like(&LEAVE_PROJECT_PATTERNS)?,
        public_holiday: projects.find_by_name_like(&HOLIDAY_PROJECT_PATTERNS)?,
    };
    if special.leave.is_none() {
        msg_warning!(Message::LeaveProjectNotFound);
    }
    if special.public_holiday.is_none() {
        msg_warning!(Message::HolidayProjectNotFound);
    }

    let entries = Entries::new()?.fetch(&EntryFilter::between(from, to))?;
    msg_debug!(Message::EntriesLoaded(entries.len()));

    let summary = TeamSummary::calculate(from, to, &users, &entries, special);

    msg_print!(Message::TeamSummaryHeader(from.to_string(), to.to_string()), true);
    msg_info!(Message::WorkingDays(summary.working_days));
    View::team(&summary)?;

    Ok(())
}
