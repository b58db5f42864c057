//! Display implementation for application messages.
//!
//! All user-facing text lives here, so wording stays consistent between the
//! terminal, the HTML views and error output. Messages with parameters
//! interpolate them directly:
//!
//! ```rust
//! use timesheet::libs::messages::Message;
//!
//! assert_eq!(Message::EntriesLoaded(3).to_string(), "Loaded 3 time entries");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database".to_string(),
            Message::ConfigModuleReport => "Report defaults".to_string(),
            Message::ConfigModuleProfit => "Profit rates".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file: {}", path),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Using time-tracker database: {}", path),
            Message::DatabaseOpenFailed(path) => format!("Failed to open time-tracker database: {}", path),

            // === ENTRY MESSAGES ===
            Message::EntriesLoaded(count) => format!("Loaded {} time entries", count),
            Message::NoEntriesFound => "No time entries found for the selected filters".to_string(),
            Message::ClientNotFound(id) => format!("Client with ID {} not found", id),

            // === REPORT MESSAGES ===
            Message::ReportHeader(title) => format!("📊 {}", title),
            Message::ReportGrouping(keys) => format!("Grouped by: {}", keys),
            Message::TotalsOnlyNotice => "Totals only: individual entries are hidden".to_string(),
            Message::HtmlReportWritten(path) => format!("HTML report written to: {}", path),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting data as {}...", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === TEAM SUMMARY MESSAGES ===
            Message::TeamSummaryHeader(from, to) => format!("👥 Team summary {} – {}", from, to),
            Message::WorkingDays(days) => format!("Working days in period: {}", days),
            Message::LeaveProjectNotFound => "Leave project not found, leave hours will be 0".to_string(),
            Message::HolidayProjectNotFound => "Public holiday project not found, holiday hours will be 0".to_string(),

            // === PROFIT MESSAGES ===
            Message::ProfitHeader(from, to) => format!("💰 Profit {} – {}", from, to),
            Message::ProfitWritten(path) => format!("Profit report written to: {}", path),
            Message::NoUsersFound => "No active users found".to_string(),

            // === PROGRESS MESSAGES ===
            Message::ProgressWritten(path) => format!("Progress report written to: {}", path),

            // === LOOKUP MESSAGES ===
            Message::DateRange(from, to) => format!("Entries span {} to {}", from, to),
            Message::NoDateRange => "The database holds no active entries".to_string(),
            Message::LookupEmpty(kind) => format!("No active {} found", kind),

            // === INPUT MESSAGES ===
            Message::InvalidDateRange(from, to) => format!("Start date {} is after end date {}", from, to),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDatabasePath => "Path to the time-tracker database".to_string(),
            Message::PromptDefaultGrouping => "Default grouping (comma separated, e.g. client,project)".to_string(),
            Message::PromptTotalsOnly => "Show totals only by default".to_string(),
            Message::PromptReportTitle => "Report title".to_string(),
            Message::PromptClientRate => "Client hourly rate".to_string(),
        };
        write!(f, "{}", s)
    }
}
