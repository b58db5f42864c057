//! Per-member hours summary over a date range.
//!
//! Paid hours assume an eight hour day on every weekday of the period. Worked
//! hours count every entry; leave and public holiday hours count entries on
//! the dedicated projects; charged hours count billable entries.

use super::duration::duration_to_hours;
use super::entry::EntryRecord;
use super::lookup::User;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

pub const HOURS_PER_DAY: f64 = 8.0;

/// Number of Monday-Friday dates in `from..=to`.
pub fn working_days(from: NaiveDate, to: NaiveDate) -> i64 {
    from.iter_days()
        .take_while(|day| *day <= to)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as i64
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(date);
    (first, last)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSummary {
    pub name: String,
    pub paid_hours: f64,
    pub worked_hours: f64,
    pub leave_hours: f64,
    pub public_holiday_hours: f64,
    pub charged_hours: f64,
    pub charged_percentage: f64,
    /// Billable hours per client name, only clients with hours.
    pub client_hours: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub working_days: i64,
    pub members: Vec<MemberSummary>,
    pub totals: MemberSummary,
}

/// Projects whose hours are reported separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialProjects {
    pub leave: Option<i64>,
    pub public_holiday: Option<i64>,
}

impl TeamSummary {
    /// Summarises `entries` for each of `users`, in the order given.
    pub fn calculate(
        date_from: NaiveDate,
        date_to: NaiveDate,
        users: &[User],
        entries: &[EntryRecord],
        special: SpecialProjects,
    ) -> Self {
        let working_days = working_days(date_from, date_to);
        let paid_hours = working_days as f64 * HOURS_PER_DAY;

        let members: Vec<MemberSummary> = users
            .iter()
            .map(|user| {
                let mut member = MemberSummary {
                    name: user.display_name(),
                    paid_hours,
                    ..Default::default()
                };

                for entry in entries.iter().filter(|entry| entry.user_id == user.id) {
                    let hours = duration_to_hours(entry.duration.as_deref().unwrap_or(""));
                    member.worked_hours += hours;
                    if entry.project_id.is_some() && entry.project_id == special.leave {
                        member.leave_hours += hours;
                    }
                    if entry.project_id.is_some() && entry.project_id == special.public_holiday {
                        member.public_holiday_hours += hours;
                    }
                    if entry.billable {
                        member.charged_hours += hours;
                        if let Some(client) = entry.client_name.as_deref().filter(|name| !name.is_empty()) {
                            *member.client_hours.entry(client.to_string()).or_insert(0.0) += hours;
                        }
                    }
                }

                member.client_hours.retain(|_, hours| *hours > 0.0);
                member.charged_percentage = percentage(member.charged_hours, member.paid_hours);
                member
            })
            .collect();

        let totals = totals(&members);

        TeamSummary {
            date_from,
            date_to,
            working_days,
            members,
            totals,
        }
    }

    /// Every client appearing in any member's hours, sorted by name.
    pub fn client_names(&self) -> Vec<String> {
        self.totals.client_hours.keys().cloned().collect()
    }
}

fn totals(members: &[MemberSummary]) -> MemberSummary {
    let mut totals = MemberSummary {
        name: "Total".to_string(),
        ..Default::default()
    };
    for member in members {
        totals.paid_hours += member.paid_hours;
        totals.worked_hours += member.worked_hours;
        totals.leave_hours += member.leave_hours;
        totals.public_holiday_hours += member.public_holiday_hours;
        totals.charged_hours += member.charged_hours;
        for (client, hours) in &member.client_hours {
            *totals.client_hours.entry(client.clone()).or_insert(0.0) += hours;
        }
    }
    totals.charged_percentage = percentage(totals.charged_hours, totals.paid_hours);
    totals
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
