//! Time entry records as read from the store and as consumed by reports.
//!
//! Two shapes exist:
//!
//! - [`EntryRecord`] is one joined row of the time-tracker log, with ids and
//!   nullable names exactly as stored.
//! - [`TimeEntry`] is the flattened, display-ready record the grouping engine
//!   works on. It is immutable once built and the engine only ever borrows it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged unit of work, ready for grouping and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub user: String,
    pub client: Option<String>,
    pub project: String,
    pub task: Option<String>,
    /// Logged duration as `HH:MM` or `HH:MM:SS`.
    pub duration: String,
    pub note: Option<String>,
}

impl TimeEntry {
    pub fn new(date: &str, user: &str, project: &str, duration: &str) -> Self {
        TimeEntry {
            date: date.to_string(),
            user: user.to_string(),
            client: None,
            project: project.to_string(),
            task: None,
            duration: duration.to_string(),
            note: None,
        }
    }

    pub fn with_client(mut self, client: &str) -> Self {
        self.client = Some(client.to_string());
        self
    }

    pub fn with_task(mut self, task: &str) -> Self {
        self.task = Some(task.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// One row of the time-tracker log joined with its user, client, project
/// and task names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRecord {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub user_login: Option<String>,
    pub date: String,
    pub start: Option<String>,
    pub duration: Option<String>,
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub task_id: Option<i64>,
    pub task_name: Option<String>,
    pub task_number: Option<String>,
    pub comment: Option<String>,
    pub billable: bool,
}

impl EntryRecord {
    /// Display name of the user, falling back to the login.
    pub fn user_display(&self) -> String {
        non_empty(self.user_name.as_deref())
            .or_else(|| non_empty(self.user_login.as_deref()))
            .unwrap_or_default()
            .to_string()
    }

    /// Maps the stored row into the record the report engine groups.
    ///
    /// The task is labelled `<number> <name>`, where the number is the task
    /// number custom field or `#<task id>`. Missing client and project names
    /// are left empty here; the grouping engine substitutes its placeholders.
    pub fn to_time_entry(&self) -> TimeEntry {
        TimeEntry {
            date: date_only(&self.date).to_string(),
            user: self.user_display(),
            client: non_empty(self.client_name.as_deref()).map(str::to_string),
            project: self.project_name.clone().unwrap_or_default(),
            task: self.task_label(),
            duration: self.duration.clone().unwrap_or_default(),
            note: non_empty(self.comment.as_deref()).map(str::to_string),
        }
    }

    /// Same as [`to_time_entry`](Self::to_time_entry), but the task is the
    /// task number custom field alone. Progress notes merge work by the
    /// `#<digits>` in that field, so a synthesized `#<task id>` must not
    /// stand in for it.
    pub fn to_progress_entry(&self) -> TimeEntry {
        TimeEntry {
            task: non_empty(self.task_number.as_deref()).map(str::to_string),
            ..self.to_time_entry()
        }
    }

    pub fn task_label(&self) -> Option<String> {
        let number = non_empty(self.task_number.as_deref())
            .map(str::to_string)
            .or_else(|| self.task_id.map(|id| format!("#{}", id)));
        let name = non_empty(self.task_name.as_deref());

        match (number, name) {
            (Some(number), Some(name)) => Some(format!("{} {}", number, name)),
            (Some(number), None) => Some(number),
            (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}

/// Strips any time component from a stored date (`2025-07-01T00:00:00`,
/// `2025-07-01 09:30:00`).
pub fn date_only(value: &str) -> &str {
    value.split(['T', ' ']).next().unwrap_or(value)
}

/// Stable sort by date ascending; entries sharing a date keep arrival order.
pub fn sort_by_date(entries: &mut [TimeEntry]) {
    entries.sort_by(|a, b| a.date.cmp(&b.date));
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Restricts which log rows are loaded. Every field is optional; an empty
/// filter loads every active entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub user_id: Option<i64>,
    pub project_ids: Vec<i64>,
    pub task_id: Option<i64>,
    pub client_id: Option<i64>,
    pub billable_only: bool,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn between(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        EntryFilter {
            date_from: Some(date_from),
            date_to: Some(date_to),
            ..Default::default()
        }
    }
}
