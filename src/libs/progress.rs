//! Plain-text team progress report.
//!
//! Entries are grouped per user, then project, then task. Work on the same
//! task is merged into one line: by task number when both sides carry one,
//! otherwise by identical description. Leave and public holidays are listed
//! separately by date.

use super::duration::duration_to_hours;
use super::entry::TimeEntry;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

pub const DEFAULT_INTRO: &str = "Here is the team's progress for the period as follows.";

static TASK_NUMBER: OnceLock<Regex> = OnceLock::new();

/// Digits of the first `#<digits>` in `text`.
pub fn extract_task_number(text: &str) -> Option<String> {
    let pattern = TASK_NUMBER.get_or_init(|| Regex::new(r"#(\d+)").expect("task number pattern is valid"));
    pattern.captures(text).map(|captures| captures[1].to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskProgress {
    pub task_number: Option<String>,
    pub description: String,
    pub hours: f64,
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectProgress {
    pub name: String,
    pub tasks: Vec<TaskProgress>,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayOff {
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    pub name: String,
    pub projects: Vec<ProjectProgress>,
    pub public_holidays: Vec<DayOff>,
    pub leave: Vec<DayOff>,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressReport {
    pub users: Vec<UserProgress>,
}

enum Kind {
    PublicHoliday,
    Leave,
    Work,
}

fn classify(entry: &TimeEntry) -> Kind {
    let fields = [
        entry.project.to_lowercase(),
        entry.task.as_deref().unwrap_or("").to_lowercase(),
        entry.note.as_deref().unwrap_or("").to_lowercase(),
    ];
    if fields.iter().any(|field| field.contains("public holiday")) {
        Kind::PublicHoliday
    } else if fields.iter().any(|field| field.contains("leave")) {
        Kind::Leave
    } else {
        Kind::Work
    }
}

impl ProgressReport {
    /// Groups entries in input order; users, projects and tasks appear in the
    /// order first seen.
    pub fn build(entries: &[TimeEntry]) -> Self {
        let mut report = ProgressReport::default();

        for entry in entries {
            let hours = duration_to_hours(&entry.duration);
            let user = report.user_mut(&entry.user);
            let description = entry.note.clone().unwrap_or_default();
            let task = entry.task.clone().unwrap_or_default();

            match classify(entry) {
                Kind::PublicHoliday => user.public_holidays.push(DayOff {
                    date: entry.date.clone(),
                    reason: first_non_empty(&description, &task, "Public Holiday"),
                }),
                Kind::Leave => user.leave.push(DayOff {
                    date: entry.date.clone(),
                    reason: first_non_empty(&description, &task, "Leave"),
                }),
                Kind::Work => {
                    let task_number = extract_task_number(&task);
                    let project = match user.projects.iter().position(|p| p.name == entry.project) {
                        Some(position) => &mut user.projects[position],
                        None => {
                            user.projects.push(ProjectProgress {
                                name: entry.project.clone(),
                                tasks: Vec::new(),
                                total_hours: 0.0,
                            });
                            let last = user.projects.len() - 1;
                            &mut user.projects[last]
                        }
                    };

                    let existing = project.tasks.iter_mut().find(|existing| match (&task_number, &existing.task_number) {
                        (Some(number), Some(existing_number)) => number == existing_number,
                        _ => existing.description == description,
                    });
                    match existing {
                        Some(existing) => {
                            existing.hours += hours;
                            if !existing.dates.contains(&entry.date) {
                                existing.dates.push(entry.date.clone());
                            }
                        }
                        None => project.tasks.push(TaskProgress {
                            task_number,
                            description,
                            hours,
                            dates: vec![entry.date.clone()],
                        }),
                    }
                    project.total_hours += hours;
                }
            }

            user.total_hours += hours;
        }

        report
    }

    fn user_mut(&mut self, name: &str) -> &mut UserProgress {
        let position = match self.users.iter().position(|user| user.name == name) {
            Some(position) => position,
            None => {
                self.users.push(UserProgress {
                    name: name.to_string(),
                    projects: Vec::new(),
                    public_holidays: Vec::new(),
                    leave: Vec::new(),
                    total_hours: 0.0,
                });
                self.users.len() - 1
            }
        };
        &mut self.users[position]
    }

    pub fn render_text(&self, intro: &str, generated_on: NaiveDate) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Team Progress Report");
        let _ = writeln!(out, "Generated on: {}", generated_on.format("%Y-%m-%d"));
        let _ = writeln!(out);
        if !intro.trim().is_empty() {
            let _ = writeln!(out, "{}", intro.trim());
            let _ = writeln!(out);
        }

        for user in &self.users {
            let _ = writeln!(out, "{}", user.name);

            for project in user.projects.iter().filter(|p| !p.tasks.is_empty()) {
                let _ = writeln!(out, "{}", project.name);
                for task in &project.tasks {
                    let prefix = task.task_number.as_ref().map(|n| format!("#{} | ", n)).unwrap_or_default();
                    let dates = if task.dates.len() > 1 {
                        format!(" ({})", task.dates.join(", "))
                    } else {
                        String::new()
                    };
                    let _ = writeln!(out, "{}{}{}", prefix, task.description, dates);
                }
                let _ = writeln!(out);
            }

            if !user.public_holidays.is_empty() {
                let dates: Vec<&str> = user.public_holidays.iter().map(|day| day.date.as_str()).collect();
                let _ = writeln!(out, "{} - Public Holiday", dates.join(", "));
                let _ = writeln!(out);
            }
            if !user.leave.is_empty() {
                let dates: Vec<&str> = user.leave.iter().map(|day| day.date.as_str()).collect();
                let _ = writeln!(out, "{} - Leave", dates.join(", "));
                let _ = writeln!(out);
            }

            let _ = writeln!(out);
        }

        out
    }
}

fn first_non_empty(first: &str, second: &str, fallback: &str) -> String {
    [first, second]
        .into_iter()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
