use super::duration::sum_durations;
use super::entry::{sort_by_date, TimeEntry};
use super::grouping::{build_groups, Group, GroupingKeys};
use super::tree::{render, ReportRow};
use chrono::{Duration, Local, NaiveDateTime};

/// A grouped timesheet: the entries, how to group them and how to show them.
///
/// The report owns its entries; the grouping tree and row sequence borrow
/// them and are rebuilt on demand.
#[derive(Debug, Clone)]
pub struct TimesheetReport {
    pub title: String,
    pub client: Option<String>,
    pub keys: GroupingKeys,
    pub totals_only: bool,
    pub generated_at: NaiveDateTime,
    entries: Vec<TimeEntry>,
}

/// Figures shown above the grouped rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: Duration,
    pub entry_count: usize,
    /// Distinct users in first-seen order.
    pub users: Vec<String>,
    /// Distinct projects in first-seen order.
    pub projects: Vec<String>,
}

impl TimesheetReport {
    /// Builds a report with entries sorted by date.
    pub fn build(
        title: &str,
        client: Option<String>,
        mut entries: Vec<TimeEntry>,
        keys: GroupingKeys,
        totals_only: bool,
    ) -> Self {
        sort_by_date(&mut entries);
        tracing::debug!(entries = entries.len(), levels = keys.len(), totals_only, "building timesheet report");
        TimesheetReport {
            title: title.to_string(),
            client,
            keys,
            totals_only,
            generated_at: Local::now().naive_local(),
            entries,
        }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn groups(&self) -> Vec<Group<'_>> {
        build_groups(&self.entries, &self.keys)
    }

    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        render(&self.groups(), self.totals_only)
    }

    pub fn summary(&self) -> ReportSummary {
        let mut users: Vec<String> = Vec::new();
        let mut projects: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !users.contains(&entry.user) {
                users.push(entry.user.clone());
            }
            if !projects.contains(&entry.project) {
                projects.push(entry.project.clone());
            }
        }

        ReportSummary {
            total: sum_durations(&self.entries),
            entry_count: self.entries.len(),
            users,
            projects,
        }
    }
}
