//! # Timesheet - grouped reports over a time-tracker database
//!
//! Reads logged time entries from a time-tracker SQLite store and turns them
//! into grouped timesheets, team summaries, progress notes and profit reports.
//!
//! ## Features
//!
//! - **Grouped Reports**: Nest entries up to three levels deep by date, user,
//!   client, project or task with subtotals at every leaf
//! - **Output Formats**: Console tables, printable HTML, CSV, JSON and Excel
//! - **Team Summary**: Paid, worked, leave and charged hours per member
//! - **Profit Report**: Client income against staff cost and expenses
//! - **Progress Report**: Plain-text task list per member
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timesheet::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
