//! Export of grouped timesheets and profit reports to CSV, JSON and Excel.
//!
//! ## Grouped timesheet
//!
//! - **CSV**: one line per report row (`Level, Group, Date, User, Client,
//!   Project, Task, Duration, Note`) followed by a `TOTAL` line. Group headers
//!   carry their entry count in the note column.
//! - **JSON**: the nested group tree with per-group totals. Entries are left
//!   out in totals-only mode.
//! - **Excel**: the CSV layout on a single worksheet with bold group rows.
//!
//! ## Profit report
//!
//! The Excel workbook has `Summary`, `Users`, `Other Incomes` and `Expenses`
//! sheets. Per-user cost and every summary total are live formulas, so edits
//! to rates or hours in the workbook recalculate the profit. Cached results
//! are written alongside so viewers that do not recalculate still show values.
//!
//! Output files default to `timesheet_export_<YYYYmmdd_HHMMSS>.<ext>` in the
//! current directory.

use crate::libs::formatter::{format_currency, format_duration, format_duration_str};
use crate::libs::grouping::Group;
use crate::libs::messages::Message;
use crate::libs::profit::ProfitReport;
use crate::libs::report::TimesheetReport;
use crate::libs::tree::ReportRow;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, Formula, Workbook};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const REPORT_COLUMNS: [&str; 9] = ["Level", "Group", "Date", "User", "Client", "Project", "Task", "Duration", "Note"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Excel => "Excel",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Serialize)]
pub struct ExportEntry {
    pub date: String,
    pub user: String,
    pub client: Option<String>,
    pub project: String,
    pub task: Option<String>,
    pub duration: String,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportGroup {
    pub key: String,
    pub level: usize,
    pub entry_count: usize,
    pub total: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<ExportEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ExportGroup>,
}

#[derive(Debug, Serialize)]
pub struct ExportTimesheet {
    pub title: String,
    pub client: Option<String>,
    pub generated_at: String,
    pub grouping: Vec<String>,
    pub totals_only: bool,
    pub total: String,
    pub entry_count: usize,
    pub users: Vec<String>,
    pub projects: Vec<String>,
    pub groups: Vec<ExportGroup>,
}

impl ExportTimesheet {
    pub fn from_report(report: &TimesheetReport) -> Self {
        let summary = report.summary();
        ExportTimesheet {
            title: report.title.clone(),
            client: report.client.clone(),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            grouping: report.keys.as_slice().iter().map(|key| key.to_string()).collect(),
            totals_only: report.totals_only,
            total: format_duration(&summary.total),
            entry_count: summary.entry_count,
            users: summary.users,
            projects: summary.projects,
            groups: report
                .groups()
                .iter()
                .map(|group| ExportGroup::from_group(group, report.totals_only))
                .collect(),
        }
    }
}

impl ExportGroup {
    fn from_group(group: &Group<'_>, totals_only: bool) -> Self {
        let entries = if totals_only {
            Vec::new()
        } else {
            group
                .entries
                .iter()
                .map(|entry| ExportEntry {
                    date: entry.date.clone(),
                    user: entry.user.clone(),
                    client: entry.client.clone(),
                    project: entry.project.clone(),
                    task: entry.task.clone(),
                    duration: format_duration_str(&entry.duration),
                    note: entry.note.clone(),
                })
                .collect()
        };

        ExportGroup {
            key: group.key.clone(),
            level: group.level,
            entry_count: group.entry_count(),
            total: format_duration(&group.total()),
            entries,
            groups: group
                .sub_groups
                .iter()
                .map(|sub_group| ExportGroup::from_group(sub_group, totals_only))
                .collect(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("timesheet_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_report(&self, report: &TimesheetReport) -> Result<()> {
        msg_info!(Message::ExportingData(self.format.to_string()));

        match self.format {
            ExportFormat::Csv => self.export_report_csv(report)?,
            ExportFormat::Json => self.write_json(&ExportTimesheet::from_report(report))?,
            ExportFormat::Excel => self.export_report_excel(report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_profit(&self, report: &ProfitReport) -> Result<()> {
        msg_info!(Message::ExportingData(self.format.to_string()));

        match self.format {
            ExportFormat::Csv => self.export_profit_csv(report)?,
            ExportFormat::Json => self.write_json(report)?,
            ExportFormat::Excel => self.export_profit_excel(report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_report_csv(&self, report: &TimesheetReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(REPORT_COLUMNS)?;

        for row in report.rows() {
            wtr.write_record(report_row_cells(&row))?;
        }

        let summary = report.summary();
        let total = format_duration(&summary.total);
        let count = format!("{} entries", summary.entry_count);
        wtr.write_record(["", "TOTAL", "", "", "", "", "", total.as_str(), count.as_str()])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_report_excel(&self, report: &TimesheetReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet().set_name("Timesheet")?;

        let header_format = Format::new().set_bold().set_background_color(Color::Gray);
        let group_format = Format::new().set_bold();
        let subtotal_format = Format::new().set_italic();

        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        let mut row_num: u32 = 1;
        for row in report.rows() {
            let format = match row {
                ReportRow::Header { .. } => Some(&group_format),
                ReportRow::Subtotal { .. } => Some(&subtotal_format),
                ReportRow::Entry { .. } => None,
            };
            for (col, cell) in report_row_cells(&row).iter().enumerate() {
                match format {
                    Some(format) => worksheet.write_string_with_format(row_num, col as u16, cell, format)?,
                    None => worksheet.write_string(row_num, col as u16, cell)?,
                };
            }
            row_num += 1;
        }

        let summary = report.summary();
        worksheet.write_string_with_format(row_num, 1, "TOTAL", &header_format)?;
        worksheet.write_string_with_format(row_num, 7, format_duration(&summary.total), &header_format)?;
        worksheet.write_string_with_format(row_num, 8, format!("{} entries", summary.entry_count), &header_format)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_profit_csv(&self, report: &ProfitReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["SUMMARY", "", "", "", ""])?;
        for (label, value) in profit_summary_lines(report) {
            wtr.write_record([label.as_str(), value.as_str(), "", "", ""])?;
        }

        wtr.write_record(["", "", "", "", ""])?;
        wtr.write_record(["USERS", "", "", "", ""])?;
        wtr.write_record(["Name", "Income Hours", "Rate", "Cost", "All Hours (Cost)"])?;
        for user in &report.users {
            wtr.write_record([
                user.name.clone(),
                format!("{:.2}", user.income_hours),
                format!("{:.2}", user.rate),
                format!("{:.2}", user.cost),
                format!("{:.2}", user.cost_hours),
            ])?;
        }

        for (title, items) in [("OTHER INCOMES", &report.other_incomes), ("EXPENSES", &report.expenses)] {
            wtr.write_record(["", "", "", "", ""])?;
            wtr.write_record([title, "", "", "", ""])?;
            wtr.write_record(["Description", "Amount", "", "", ""])?;
            for item in items {
                wtr.write_record([item.description.clone(), format!("{:.2}", item.amount), String::new(), String::new(), String::new()])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_profit_excel(&self, report: &ProfitReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(Color::Gray);
        let money_format = Format::new().set_num_format("$#,##0.00");
        let hours_format = Format::new().set_num_format("0.00");
        let total_format = Format::new().set_bold().set_num_format("$#,##0.00");

        {
            let summary = workbook.add_worksheet().set_name("Summary")?;
            let period = format!("{} → {}", report.date_from.format("%Y-%m-%d"), report.date_to.format("%Y-%m-%d"));

            summary.write_string(0, 0, "Period")?;
            summary.write_string(0, 1, period)?;
            summary.write_string(1, 0, "Client Rate ($/hr)")?;
            summary.write_number_with_format(1, 1, report.client_rate, &money_format)?;
            summary.write_string(2, 0, "Projects (income only)")?;
            summary.write_string(2, 1, report.projects_label())?;

            let totals: [(u32, &str, &str, f64, &Format); 7] = [
                (3, "Client Income", "=SUM(Users!B2:B1048576)*B2", report.client_income, &money_format),
                (4, "Other Income Total", "=SUM('Other Incomes'!B2:B1048576)", report.other_income, &money_format),
                (6, "Total Income", "=B4+B5", report.total_income, &total_format),
                (8, "Staff Cost", "=SUM(Users!D2:D1048576)", report.staff_cost, &money_format),
                (9, "Other Expenses", "=SUM(Expenses!B2:B1048576)", report.other_expenses, &money_format),
                (11, "Total Expenses", "=B9+B10", report.total_expenses, &total_format),
                (13, "Profit", "=B7-B12", report.profit, &total_format),
            ];
            for (row, label, formula, value, format) in totals {
                summary.write_string(row, 0, label)?;
                summary.write_formula_with_format(row, 1, cached(formula, value), format)?;
            }

            summary.set_column_width(0, 28)?;
            summary.set_column_width(1, 60)?;
        }

        {
            let users = workbook.add_worksheet().set_name("Users")?;
            for (col, title) in ["Name", "Income Hours", "Rate ($/hr)", "Cost ($) = AllHours*Rate", "All Hours (Cost)"]
                .iter()
                .enumerate()
            {
                users.write_string_with_format(0, col as u16, *title, &header_format)?;
            }

            for (i, user) in report.users.iter().enumerate() {
                let row = i as u32 + 1;
                let excel_row = row + 1;
                users.write_string(row, 0, &user.name)?;
                users.write_number_with_format(row, 1, user.income_hours, &hours_format)?;
                users.write_number_with_format(row, 2, user.rate, &money_format)?;
                users.write_formula_with_format(row, 3, cached(&format!("=E{}*C{}", excel_row, excel_row), user.cost), &money_format)?;
                users.write_number_with_format(row, 4, user.cost_hours, &hours_format)?;
            }

            for (col, width) in [28, 16, 14, 24, 16].iter().enumerate() {
                users.set_column_width(col as u16, *width)?;
            }
        }

        for (name, items) in [("Other Incomes", &report.other_incomes), ("Expenses", &report.expenses)] {
            let sheet = workbook.add_worksheet().set_name(name)?;
            sheet.write_string_with_format(0, 0, "Description", &header_format)?;
            sheet.write_string_with_format(0, 1, "Amount", &header_format)?;
            for (i, item) in items.iter().enumerate() {
                let row = i as u32 + 1;
                sheet.write_string(row, 0, &item.description)?;
                sheet.write_number_with_format(row, 1, item.amount, &money_format)?;
            }
            sheet.set_column_width(0, 36)?;
            sheet.set_column_width(1, 16)?;
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

/// The nine CSV/Excel cells of a report row.
fn report_row_cells(row: &ReportRow<'_>) -> Vec<String> {
    match row {
        ReportRow::Header {
            level,
            label,
            entry_count,
            duration,
        } => vec![
            level.to_string(),
            label.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_duration(duration),
            format!("{} entries", entry_count),
        ],
        ReportRow::Entry { level, entry } => vec![
            level.to_string(),
            String::new(),
            entry.date.clone(),
            entry.user.clone(),
            entry.client.clone().unwrap_or_default(),
            entry.project.clone(),
            entry.task.clone().unwrap_or_default(),
            format_duration_str(&entry.duration),
            entry.note.clone().unwrap_or_default(),
        ],
        ReportRow::Subtotal { level, duration } => vec![
            level.to_string(),
            "Subtotal".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_duration(duration),
            String::new(),
        ],
    }
}

fn profit_summary_lines(report: &ProfitReport) -> Vec<(String, String)> {
    vec![
        (
            "Period".to_string(),
            format!("{} → {}", report.date_from.format("%Y-%m-%d"), report.date_to.format("%Y-%m-%d")),
        ),
        ("Client Rate ($/hr)".to_string(), format_currency(report.client_rate)),
        ("Projects (income only)".to_string(), report.projects_label()),
        ("Client Income".to_string(), format_currency(report.client_income)),
        ("Other Income Total".to_string(), format_currency(report.other_income)),
        ("Total Income".to_string(), format_currency(report.total_income)),
        ("Staff Cost".to_string(), format_currency(report.staff_cost)),
        ("Other Expenses".to_string(), format_currency(report.other_expenses)),
        ("Total Expenses".to_string(), format_currency(report.total_expenses)),
        ("Profit".to_string(), format_currency(report.profit)),
    ]
}

fn cached(formula: &str, value: f64) -> Formula {
    Formula::new(formula).set_result(format!("{}", value))
}
