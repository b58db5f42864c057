//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. [`Cli::menu`] parses the arguments and dispatches.

pub mod export;
pub mod filters;
pub mod init;
pub mod lookup;
pub mod profit;
pub mod progress;
pub mod report;
pub mod team;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Print a grouped timesheet or write it as HTML")]
    Report(report::ReportArgs),
    #[command(about = "Export a grouped timesheet to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Hours summary per team member")]
    Team(team::TeamArgs),
    #[command(about = "Income, cost and profit for a period")]
    Profit(profit::ProfitArgs),
    #[command(about = "Plain-text progress report per team member")]
    Progress(progress::ProgressArgs),
    #[command(about = "List users, projects, clients, tasks or the stored date range")]
    Lookup(lookup::LookupArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Team(args) => team::cmd(args),
            Commands::Profit(args) => profit::cmd(args),
            Commands::Progress(args) => progress::cmd(args),
            Commands::Lookup(args) => lookup::cmd(args),
        }
    }
}
