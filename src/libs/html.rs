//! Print-ready HTML documents for the grouped timesheet and the profit report.
//!
//! Both pages are self-contained (inline CSS) so they can be opened in a
//! browser and printed to PDF. All text is escaped by `maud`.

use super::entry::TimeEntry;
use super::formatter::{format_currency, format_duration, format_duration_str, format_hours};
use super::grouping::NO_CLIENT;
use super::profit::{LineItem, ProfitReport};
use super::report::TimesheetReport;
use super::tree::ReportRow;
use anyhow::Result;
use chrono::Duration;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

const INDENT_PX: usize = 20;

const CSS: &str = r#"
body { font-family: 'Inter', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; background: #f8fafc; color: #1e293b; line-height: 1.6; }
.container { max-width: 1000px; margin: 0 auto; background: white; padding: 40px 12px 32px 12px; }
.header { margin-bottom: 32px; padding-bottom: 18px; border-bottom: 3px solid #3b82f6; }
.main-title { font-size: 2rem; font-weight: 800; color: #1e40af; letter-spacing: 1px; }
.client-subheading { font-size: 1.25rem; color: #334155; font-weight: 600; text-transform: uppercase; }
.notice { color: #6366f1; font-size: 0.9rem; margin-top: 8px; }
.summary-section, .details-section { display: flex; gap: 32px; margin-bottom: 32px; }
.summary-card { background: linear-gradient(135deg, #3b82f6 0%, #6366f1 100%); color: white; padding: 18px 28px; border-radius: 12px; text-align: center; flex: 1; }
.summary-card h3 { margin: 0 0 8px 0; font-size: 0.95rem; text-transform: uppercase; opacity: 0.9; }
.summary-card .value { font-size: 1.5rem; font-weight: 800; margin: 0; }
.detail-card { background: #f1f5f9; padding: 18px 24px; border-radius: 10px; border-left: 4px solid #3b82f6; flex: 1; }
.detail-card h3 { margin: 0 0 12px 0; color: #1e40af; font-size: 1rem; text-transform: uppercase; }
.detail-list { list-style: none; padding: 0; margin: 0; }
.detail-list li { padding: 4px 0; border-bottom: 1px solid #e2e8f0; color: #475569; }
.group-header { background: linear-gradient(90deg, #1e40af 0%, #3b82f6 100%); color: white; padding: 12px 20px; margin: 24px 0 0 0; border-radius: 10px 10px 0 0; font-weight: bold; display: flex; justify-content: space-between; }
.group-header.nested { background: linear-gradient(90deg, #6366f1 0%, #8b5cf6 100%); margin-top: 12px; }
.group-stats { font-size: 0.98rem; opacity: 0.9; }
.totals-only .group-header { border-radius: 10px; }
table { width: 100%; border-collapse: collapse; margin-bottom: 24px; }
th { background: #f1f5f9; padding: 10px 6px; text-align: left; color: #334155; font-size: 0.95rem; text-transform: uppercase; border-bottom: 2px solid #e2e8f0; }
td { padding: 8px 6px; border-bottom: 1px solid #f1f5f9; color: #475569; }
.number { text-align: right; }
.duration-cell { font-weight: 700; color: #059669; text-align: right; }
.note-cell { max-width: 400px; word-wrap: break-word; white-space: pre-line; }
.total-row { background: #e0e7ff; font-weight: 800; color: #1e40af; }
.profit-positive { color: #059669; }
.profit-negative { color: #dc2626; }
"#;

/// Writes the grouped timesheet page to `path`.
pub fn write_timesheet(report: &TimesheetReport, path: &Path) -> Result<()> {
    fs::write(path, timesheet_page(report).into_string())?;
    Ok(())
}

pub fn write_profit(report: &ProfitReport, path: &Path) -> Result<()> {
    fs::write(path, profit_page(report).into_string())?;
    Ok(())
}

pub fn timesheet_page(report: &TimesheetReport) -> Markup {
    let summary = report.summary();
    let rows = report.rows();
    let title = if report.totals_only {
        format!("{} - Summary View", report.title)
    } else {
        report.title.clone()
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.container.totals-only[report.totals_only] {
                    div.header {
                        div.main-title { (title) }
                        div.client-subheading { (report.client.as_deref().unwrap_or(NO_CLIENT)) }
                        @if report.totals_only {
                            div.notice { "This report shows group totals only. Individual entries are hidden." }
                        }
                    }
                    div.summary-section {
                        (summary_card("Total Hours", &format_duration(&summary.total)))
                        (summary_card("Total Entries", &summary.entry_count.to_string()))
                        (summary_card("Team Members", &summary.users.len().to_string()))
                        (summary_card("Projects", &summary.projects.len().to_string()))
                    }
                    div.details-section {
                        (detail_list("Team Members", &summary.users))
                        (detail_list("Projects", &summary.projects))
                    }
                    div.entries-section {
                        (render_rows(&rows))
                    }
                }
            }
        }
    }
}

fn summary_card(label: &str, value: &str) -> Markup {
    html! {
        div.summary-card {
            h3 { (label) }
            p.value { (value) }
        }
    }
}

fn detail_list(label: &str, items: &[String]) -> Markup {
    html! {
        div.detail-card {
            h3 { (label) }
            ul.detail-list {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

/// Headers become banners; each leaf's entries and subtotal become a table.
fn render_rows(rows: &[ReportRow<'_>]) -> Markup {
    let mut blocks: Vec<Markup> = Vec::new();
    let mut pending: Vec<&TimeEntry> = Vec::new();

    for row in rows {
        match row {
            ReportRow::Header {
                level,
                label,
                entry_count,
                duration,
            } => blocks.push(group_header(*level, label, *entry_count, duration)),
            ReportRow::Entry { entry, .. } => pending.push(*entry),
            ReportRow::Subtotal { level, duration } => {
                blocks.push(entries_table(*level, &pending, duration));
                pending.clear();
            }
        }
    }

    html! {
        @for block in blocks {
            (block)
        }
    }
}

fn indent_style(level: usize) -> Option<String> {
    (level > 0).then(|| format!("margin-left: {}px;", level * INDENT_PX))
}

fn group_header(level: usize, label: &str, entry_count: usize, duration: &Duration) -> Markup {
    html! {
        div.group-header.nested[level > 0] style=[indent_style(level)] {
            span { (label) }
            span.group-stats { (entry_count) " entries • " (format_duration(duration)) " hours" }
        }
    }
}

fn entries_table(level: usize, entries: &[&TimeEntry], subtotal: &Duration) -> Markup {
    html! {
        table.entries-table style=[indent_style(level)] {
            @if !entries.is_empty() {
                thead {
                    tr {
                        th { "Date" }
                        th { "User" }
                        th { "Client" }
                        th { "Project" }
                        th { "Task" }
                        th { "Duration" }
                        th { "Note" }
                    }
                }
            }
            tbody {
                @for entry in entries {
                    tr {
                        td { (entry.date) }
                        td { (entry.user) }
                        td { (entry.client.as_deref().unwrap_or("-")) }
                        td { (entry.project) }
                        td { (entry.task.as_deref().unwrap_or("-")) }
                        td.duration-cell { (format_duration_str(&entry.duration)) }
                        td.note-cell title=(entry.note.as_deref().unwrap_or("")) { (entry.note.as_deref().unwrap_or("-")) }
                    }
                }
                tr.total-row {
                    td colspan="5" style="text-align:right;" { "Subtotal" }
                    td.duration-cell { (format_duration(subtotal)) }
                    td {}
                }
            }
        }
    }
}

pub fn profit_page(report: &ProfitReport) -> Markup {
    let period = format!("{} – {}", report.date_from.format("%Y-%m-%d"), report.date_to.format("%Y-%m-%d"));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Profit Report " (period) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.container {
                    div.header {
                        div.main-title { "Profit Report" }
                        div.client-subheading { (period) }
                        div.notice { "Client rate: " (format_currency(report.client_rate)) " per hour" }
                    }
                    div.summary-section {
                        (summary_card("Total Income", &format_currency(report.total_income)))
                        (summary_card("Total Expenses", &format_currency(report.total_expenses)))
                        (summary_card("Profit", &format_currency(report.profit)))
                    }
                    h3 { "Team" }
                    table {
                        thead {
                            tr {
                                th { "User" }
                                th.number { "Income Hours" }
                                th.number { "Income" }
                                th.number { "Cost Hours" }
                                th.number { "Rate" }
                                th.number { "Cost" }
                                th.number { "Net" }
                            }
                        }
                        tbody {
                            @for user in &report.users {
                                tr {
                                    td { (user.name) }
                                    td.number { (format_hours(user.income_hours)) }
                                    td.number { (format_currency(user.income)) }
                                    td.number { (format_hours(user.cost_hours)) }
                                    td.number { (format_currency(user.rate)) }
                                    td.number { (format_currency(user.cost)) }
                                    td.number { (format_currency(user.net)) }
                                }
                            }
                            tr.total-row {
                                td { "Total" }
                                td.number { (format_hours(report.total_income_hours())) }
                                td.number { (format_currency(report.client_income)) }
                                td.number { (format_hours(report.total_cost_hours())) }
                                td {}
                                td.number { (format_currency(report.staff_cost)) }
                                td.number { (format_currency(report.client_income - report.staff_cost)) }
                            }
                        }
                    }
                    (line_items("Other Incomes", &report.other_incomes, report.other_income))
                    (line_items("Expenses", &report.expenses, report.other_expenses))
                    h3 { "Summary" }
                    table {
                        tbody {
                            tr { td { "Income from client" } td.number { (format_currency(report.client_income)) } }
                            tr { td { "Other income" } td.number { (format_currency(report.other_income)) } }
                            tr.total-row { td { "Total income" } td.number { (format_currency(report.total_income)) } }
                            tr { td { "Staff cost" } td.number { (format_currency(report.staff_cost)) } }
                            tr { td { "Other expenses" } td.number { (format_currency(report.other_expenses)) } }
                            tr.total-row { td { "Total expenses" } td.number { (format_currency(report.total_expenses)) } }
                            tr.total-row {
                                td { "Profit" }
                                td.number.profit-positive[report.profit >= 0.0].profit-negative[report.profit < 0.0] {
                                    (format_currency(report.profit))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn line_items(label: &str, items: &[LineItem], total: f64) -> Markup {
    html! {
        @if !items.is_empty() {
            h3 { (label) }
            table {
                thead {
                    tr {
                        th { "Description" }
                        th.number { "Amount" }
                    }
                }
                tbody {
                    @for item in items {
                        tr {
                            td { (item.description) }
                            td.number { (format_currency(item.amount)) }
                        }
                    }
                    tr.total-row {
                        td { "Total" }
                        td.number { (format_currency(total)) }
                    }
                }
            }
        }
    }
}
