use super::filters::{parse_date, period_or_current_month};
use crate::{
    db::entries::Entries,
    libs::{
        entry::{sort_by_date, EntryFilter, EntryRecord, TimeEntry},
        messages::Message,
        progress::{ProgressReport, DEFAULT_INTRO},
    },
    msg_debug, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ProgressArgs {
    /// First date, defaults to the start of the current month
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Last date, defaults to the end of the current month
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Opening paragraph
    #[arg(long, default_value = DEFAULT_INTRO)]
    intro: String,

    /// Write the report to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ProgressArgs) -> Result<()> {
    let (from, to) = period_or_current_month(args.from, args.to)?;

    let records = Entries::new()?.fetch(&EntryFilter::between(from, to))?;
    msg_debug!(Message::EntriesLoaded(records.len()));

    let mut entries: Vec<TimeEntry> = records.iter().map(EntryRecord::to_progress_entry).collect();
    sort_by_date(&mut entries);

    let text = ProgressReport::build(&entries).render_text(&args.intro, Local::now().date_naive());

    match args.output {
        Some(path) => {
            fs::write(&path, text)?;
            msg_success!(Message::ProgressWritten(path.display().to_string()));
        }
        None => print!("{}", text),
    }

    Ok(())
}
