//! Grouped timesheet export.
//!
//! ```bash
//! timesheet export --client 4 --group project,task -f excel -o july.xlsx
//! timesheet export --from 2025-07-01 --to 2025-07-31 --totals-only -f json
//! ```

use super::filters::FilterArgs;
use super::report::{load_report, LayoutArgs};
use crate::libs::{
    config::Config,
    export::{ExportFormat, Exporter},
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filters: FilterArgs,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, defaults to `timesheet_export_<timestamp>.<ext>`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let report = load_report(&args.filters, &args.layout, &Config::read()?)?;
    Exporter::new(args.format, args.output).export_report(&report)
}
