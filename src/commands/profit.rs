//! Profit for a period.
//!
//! Cost rates are resolved per user as `--rate` over `profit.user_rates`
//! from the configuration over the rate stored with the user. The client rate
//! is `--client-rate` over `profit.client_rate`.
//!
//! ```bash
//! timesheet profit --from 2025-07-01 --to 2025-07-31 --project 12 --client-rate 95 \
//!     --rate 3=42.5 --extra 3=6 --income "Licence resale=1200" --expense "Hosting=310" -f excel
//! ```

use super::filters::{parse_date, period_or_current_month};
use crate::{
    db::{entries::Entries, projects::Projects, users::Users},
    libs::{
        config::Config,
        entry::EntryFilter,
        export::{ExportFormat, Exporter},
        html,
        messages::Message,
        profit::{LineItem, ProfitInput, ProfitReport, ProjectSelection, UserValue},
        view::View,
    },
    msg_debug, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfitFormat {
    Csv,
    Json,
    Excel,
    Html,
}

#[derive(Debug, Args)]
pub struct ProfitArgs {
    /// First date, defaults to the start of the current month
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Last date, defaults to the end of the current month
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Income project ids (repeatable); every project when omitted
    #[arg(long = "project")]
    projects: Vec<i64>,

    /// Only these user ids (repeatable); every active user when omitted
    #[arg(long = "user")]
    users: Vec<i64>,

    /// Hourly rate charged to the client
    #[arg(long)]
    client_rate: Option<f64>,

    /// Hourly cost of a user, USER_ID=RATE (repeatable)
    #[arg(long = "rate")]
    rates: Vec<UserValue>,

    /// Extra hours for a user, USER_ID=HOURS (repeatable)
    #[arg(long = "extra")]
    extra: Vec<UserValue>,

    /// Other income, DESCRIPTION=AMOUNT (repeatable)
    #[arg(long = "income")]
    incomes: Vec<LineItem>,

    /// Expense, DESCRIPTION=AMOUNT (repeatable)
    #[arg(long = "expense")]
    expenses: Vec<LineItem>,

    /// Write the report as a file instead of printing it
    #[arg(short, long, value_enum)]
    format: Option<ProfitFormat>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ProfitArgs) -> Result<()> {
    let (from, to) = period_or_current_month(args.from, args.to)?;
    let defaults = Config::read()?.profit_defaults();

    let mut users = Users::new()?.fetch_active()?;
    if !args.users.is_empty() {
        users.retain(|user| args.users.contains(&user.id));
    }
    if users.is_empty() {
        msg_warning!(Message::NoUsersFound);
        return Ok(());
    }

    let mut user_rates: BTreeMap<i64, f64> = users.iter().map(|user| (user.id, user.rate)).collect();
    user_rates.extend(defaults.user_rates.iter().map(|(id, rate)| (*id, *rate)));
    user_rates.extend(args.rates.iter().map(|rate| (rate.user_id, rate.value)));

    let active_projects = Projects::new()?.fetch_active()?;
    let active_ids: Vec<i64> = active_projects.iter().map(|project| project.id).collect();
    let selection = ProjectSelection::resolve(&args.projects, &active_ids);
    let project_names = match &selection {
        ProjectSelection::All => Vec::new(),
        ProjectSelection::Only(ids) => active_projects
            .into_iter()
            .filter(|project| ids.contains(&project.id))
            .map(|project| project.name)
            .collect(),
    };

    let entries = Entries::new()?.fetch(&EntryFilter::between(from, to))?;
    msg_debug!(Message::EntriesLoaded(entries.len()));

    let input = ProfitInput {
        date_from: from,
        date_to: to,
        users: users.iter().map(|user| (user.id, user.display_name())).collect(),
        projects: selection,
        project_names,
        client_rate: args.client_rate.unwrap_or(defaults.client_rate),
        user_rates,
        extra_hours: args.extra,
        other_incomes: args.incomes,
        expenses: args.expenses,
    };
    let report = ProfitReport::calculate(&input, &entries);

    match args.format {
        None => {
            msg_print!(Message::ProfitHeader(from.to_string(), to.to_string()), true);
            View::profit(&report)?;
        }
        Some(ProfitFormat::Html) => {
            let path = args.output.unwrap_or_else(|| PathBuf::from(format!("profit_{}_{}.html", from, to)));
            html::write_profit(&report, &path)?;
            msg_success!(Message::ProfitWritten(path.display().to_string()));
        }
        Some(format) => {
            let export_format = match format {
                ProfitFormat::Csv => ExportFormat::Csv,
                ProfitFormat::Json => ExportFormat::Json,
                _ => ExportFormat::Excel,
            };
            Exporter::new(export_format, args.output).export_profit(&report)?;
        }
    }

    Ok(())
}
