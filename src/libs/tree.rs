//! Turns a grouping tree into the flat row sequence every renderer consumes.
//!
//! For each group, in order:
//!
//! 1. a [`ReportRow::Header`] with the group label, the number of entries
//!    beneath it and their summed duration;
//! 2. the rows of its sub-groups one level deeper, or, for a leaf group, its
//!    [`ReportRow::Entry`] rows followed by one [`ReportRow::Subtotal`].
//!
//! With `totals_only` the entry rows are left out. Headers and subtotals are
//! always emitted, and a leaf with no entries gets no subtotal.

use super::duration::sum_durations;
use super::entry::TimeEntry;
use super::grouping::Group;
use chrono::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow<'a> {
    Header {
        level: usize,
        label: String,
        entry_count: usize,
        duration: Duration,
    },
    Entry {
        level: usize,
        entry: &'a TimeEntry,
    },
    Subtotal {
        level: usize,
        duration: Duration,
    },
}

impl ReportRow<'_> {
    pub fn level(&self) -> usize {
        match self {
            ReportRow::Header { level, .. } | ReportRow::Entry { level, .. } | ReportRow::Subtotal { level, .. } => {
                *level
            }
        }
    }
}

/// Every entry under `group`, depth first.
pub fn flatten<'a>(group: &Group<'a>) -> Vec<&'a TimeEntry> {
    group.flatten()
}

/// Renders top-level groups starting at level 0.
pub fn render<'a>(groups: &[Group<'a>], totals_only: bool) -> Vec<ReportRow<'a>> {
    let mut rows = Vec::new();
    render_at(groups, totals_only, 0, &mut rows);
    rows
}

/// Renders `groups` as if they sat at `level`, appending to `rows`.
pub fn render_at<'a>(groups: &[Group<'a>], totals_only: bool, level: usize, rows: &mut Vec<ReportRow<'a>>) {
    for group in groups {
        let all = group.flatten();
        rows.push(ReportRow::Header {
            level,
            label: group.key.clone(),
            entry_count: all.len(),
            duration: sum_durations(all),
        });

        if !group.sub_groups.is_empty() {
            render_at(&group.sub_groups, totals_only, level + 1, rows);
        } else if !group.entries.is_empty() {
            if !totals_only {
                rows.extend(group.entries.iter().map(|&entry| ReportRow::Entry { level, entry }));
            }
            rows.push(ReportRow::Subtotal {
                level,
                duration: sum_durations(group.entries.iter().copied()),
            });
        }
    }
}
