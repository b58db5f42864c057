//! Grouped timesheet on the console or as a printable HTML page.

use super::filters::FilterArgs;
use crate::{
    db::{clients::Clients, entries::Entries},
    libs::{
        config::Config,
        entry::EntryRecord,
        grouping::GroupingKeys,
        html,
        messages::Message,
        report::TimesheetReport,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;

/// Grouping and presentation flags shared with `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct LayoutArgs {
    /// Comma-separated grouping keys, up to three: date, user, client, project, task
    #[arg(short, long)]
    pub group: Option<String>,

    /// Hide individual entries and show group totals only
    #[arg(long)]
    pub totals_only: bool,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    filters: FilterArgs,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Write the printable HTML page to this file instead of printing a table
    #[arg(long)]
    html: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let report = load_report(&args.filters, &args.layout, &Config::read()?)?;

    if let Some(path) = args.html {
        html::write_timesheet(&report, &path)?;
        msg_success!(Message::HtmlReportWritten(path.display().to_string()));
        return Ok(());
    }

    msg_print!(Message::ReportHeader(report.title.clone()), true);
    msg_info!(Message::ReportGrouping(report.keys.to_string()));
    if report.totals_only {
        msg_info!(Message::TotalsOnlyNotice);
    }
    View::report(&report)?;

    Ok(())
}

/// Loads the filtered entries and assembles the report. Flags win over the
/// configured report defaults.
pub fn load_report(filters: &FilterArgs, layout: &LayoutArgs, config: &Config) -> Result<TimesheetReport> {
    let defaults = config.report_defaults();
    let keys = GroupingKeys::from_str(layout.group.as_deref().unwrap_or(&defaults.grouping))?;
    let totals_only = layout.totals_only || defaults.totals_only;
    let title = layout.title.clone().unwrap_or(defaults.title);

    let client = match filters.client {
        Some(id) => {
            let client = Clients::new()?.get(id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))?;
            Some(client.name)
        }
        None => None,
    };

    let records = Entries::new()?.fetch(&filters.to_filter()?)?;
    msg_debug!(Message::EntriesLoaded(records.len()));
    if records.is_empty() {
        msg_warning!(Message::NoEntriesFound);
    }

    let entries = records.iter().map(EntryRecord::to_time_entry).collect();
    Ok(TimesheetReport::build(&title, client, entries, keys, totals_only))
}
