use super::formatter::{format_currency, format_duration, format_duration_str, format_hours, format_percentage};
use super::lookup::{Client, Project, Task, User};
use super::profit::ProfitReport;
use super::report::TimesheetReport;
use super::team::TeamSummary;
use super::tree::ReportRow;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Grouped report: one table with header, entry and subtotal rows, closed
    /// by a grand total.
    pub fn report(report: &TimesheetReport) -> Result<()> {
        let summary = report.summary();
        let mut table = Table::new();

        table.set_titles(row!["DATE", "USER", "CLIENT", "PROJECT", "TASK", "DURATION", "NOTE"]);
        for row in report.rows() {
            match row {
                ReportRow::Header {
                    level,
                    label,
                    entry_count,
                    duration,
                } => {
                    table.add_row(Row::new(vec![
                        Cell::new(&format!("{}{}", indent(level), label)).style_spec("bH5"),
                        Cell::new(&format!("{} entries • {} hours", entry_count, format_duration(&duration))).style_spec("H2r"),
                    ]));
                }
                ReportRow::Entry { level, entry } => {
                    table.add_row(row![
                        format!("{}{}", indent(level + 1), entry.date),
                        entry.user,
                        entry.client.as_deref().unwrap_or(""),
                        entry.project,
                        entry.task.as_deref().unwrap_or(""),
                        r->format_duration_str(&entry.duration),
                        entry.note.as_deref().unwrap_or("")
                    ]);
                }
                ReportRow::Subtotal { level, duration } => {
                    table.add_row(Row::new(vec![
                        Cell::new(&format!("{}Subtotal", indent(level + 1))).style_spec("iH5"),
                        Cell::new(&format_duration(&duration)).style_spec("ir"),
                        Cell::new(""),
                    ]));
                }
            }
        }
        table.add_row(Row::new(vec![
            Cell::new("TOTAL").style_spec("bH5"),
            Cell::new(&format_duration(&summary.total)).style_spec("br"),
            Cell::new(&format!("{} entries", summary.entry_count)),
        ]));
        table.printstd();

        Ok(())
    }

    pub fn team(summary: &TeamSummary) -> Result<()> {
        let clients = summary.client_names();
        let mut table = Table::new();

        let mut titles = Row::new(
            ["NAME", "PAID", "WORKED", "LEAVE", "PUBLIC HOLIDAY", "CHARGED", "CHARGED %"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        );
        for client in &clients {
            titles.add_cell(Cell::new(&client.to_uppercase()));
        }
        table.set_titles(titles);

        for member in summary.members.iter().chain(std::iter::once(&summary.totals)) {
            let mut cells = vec![
                Cell::new(&member.name),
                Cell::new(&format_hours(member.paid_hours)).style_spec("r"),
                Cell::new(&format_hours(member.worked_hours)).style_spec("r"),
                Cell::new(&format_hours(member.leave_hours)).style_spec("r"),
                Cell::new(&format_hours(member.public_holiday_hours)).style_spec("r"),
                Cell::new(&format_hours(member.charged_hours)).style_spec("r"),
                Cell::new(&format_percentage(member.charged_percentage)).style_spec("r"),
            ];
            for client in &clients {
                let hours = member.client_hours.get(client).copied().unwrap_or(0.0);
                cells.push(Cell::new(&format_hours(hours)).style_spec("r"));
            }
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }

    pub fn profit(report: &ProfitReport) -> Result<()> {
        let mut users = Table::new();
        users.set_titles(row!["USER", "INCOME HOURS", "INCOME", "COST HOURS", "RATE", "COST", "NET"]);
        for user in &report.users {
            users.add_row(row![
                user.name,
                r->format_hours(user.income_hours),
                r->format_currency(user.income),
                r->format_hours(user.cost_hours),
                r->format_currency(user.rate),
                r->format_currency(user.cost),
                r->format_currency(user.net)
            ]);
        }
        users.printstd();

        let mut summary = Table::new();
        summary.add_row(row!["Client rate", r->format_currency(report.client_rate)]);
        summary.add_row(row!["Income from client", r->format_currency(report.client_income)]);
        for item in &report.other_incomes {
            summary.add_row(row![format!("  {}", item.description), r->format_currency(item.amount)]);
        }
        summary.add_row(row![b->"Total income", br->format_currency(report.total_income)]);
        summary.add_row(row!["Staff cost", r->format_currency(report.staff_cost)]);
        for item in &report.expenses {
            summary.add_row(row![format!("  {}", item.description), r->format_currency(item.amount)]);
        }
        summary.add_row(row![b->"Total expenses", br->format_currency(report.total_expenses)]);
        summary.add_row(row![b->"Profit", br->format_currency(report.profit)]);
        summary.printstd();

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "LOGIN", "NAME", "RATE"]);
        for user in users {
            table.add_row(row![user.id, user.login, user.display_name(), r->format_currency(user.rate)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn clients(clients: &[Client]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "NAME"]);
        for client in clients {
            table.add_row(row![client.id, client.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "NAME", "DESCRIPTION"]);
        for project in projects {
            table.add_row(row![project.id, project.name, project.description.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "NAME", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.description.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}
