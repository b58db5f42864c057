//! Multi-level grouping of time entries.
//!
//! Entries are partitioned by up to three [`GroupingKey`]s into a tree of
//! [`Group`]s. Sibling groups appear in the order their key value is first
//! seen in the input, and entries keep their input order inside a group, so
//! the result is deterministic for a given input.
//!
//! ```rust
//! use timesheet::libs::entry::TimeEntry;
//! use timesheet::libs::grouping::{build_groups, GroupingKey, GroupingKeys};
//!
//! let entries = vec![
//!     TimeEntry::new("2025-07-01", "Ann", "Web", "1:00").with_client("Acme"),
//!     TimeEntry::new("2025-07-01", "Bob", "App", "2:00").with_client("Beta"),
//!     TimeEntry::new("2025-07-02", "Ann", "Web", "0:30").with_client("Acme"),
//! ];
//! let keys = GroupingKeys::new([GroupingKey::Client, GroupingKey::User]);
//! let tree = build_groups(&entries, &keys);
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree[0].key, "Acme");
//! assert_eq!(tree[0].sub_groups[0].entries.len(), 2);
//! ```

use super::duration::sum_durations;
use super::entry::TimeEntry;
use super::error::GroupingError;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum grouping depth.
pub const MAX_LEVELS: usize = 3;
/// Label of the single group produced when no grouping is requested.
pub const ROOT_KEY: &str = "All Entries";
pub const NO_CLIENT: &str = "No Client";
pub const NO_PROJECT: &str = "No Project";
pub const NO_TASK: &str = "No Task";

/// A dimension entries can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingKey {
    /// Placeholder for an unset level; dropped during normalisation.
    None,
    Date,
    User,
    Client,
    Project,
    Task,
}

impl GroupingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingKey::None => "none",
            GroupingKey::Date => "date",
            GroupingKey::User => "user",
            GroupingKey::Client => "client",
            GroupingKey::Project => "project",
            GroupingKey::Task => "task",
        }
    }

    /// Column heading used by renderers.
    pub fn label(&self) -> &'static str {
        match self {
            GroupingKey::None => "No Grouping",
            GroupingKey::Date => "Date",
            GroupingKey::User => "User",
            GroupingKey::Client => "Client",
            GroupingKey::Project => "Project",
            GroupingKey::Task => "Task",
        }
    }
}

impl fmt::Display for GroupingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupingKey {
    type Err = GroupingError;

    /// Accepts the key names case-insensitively, plus the legacy aliases
    /// `no_grouping` and `time_field_2` (the task custom field).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "no_grouping" => Ok(GroupingKey::None),
            "date" => Ok(GroupingKey::Date),
            "user" => Ok(GroupingKey::User),
            "client" => Ok(GroupingKey::Client),
            "project" => Ok(GroupingKey::Project),
            "task" | "time_field_2" => Ok(GroupingKey::Task),
            other => Err(GroupingError::UnknownKey(other.to_string())),
        }
    }
}

/// An ordered, normalised list of grouping keys.
///
/// `None` keys are removed, only the first occurrence of a repeated key is
/// kept, and at most [`MAX_LEVELS`] keys survive. An empty list means "no
/// grouping".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingKeys(Vec<GroupingKey>);

impl GroupingKeys {
    pub fn new<I: IntoIterator<Item = GroupingKey>>(keys: I) -> Self {
        let mut normalised: Vec<GroupingKey> = Vec::with_capacity(MAX_LEVELS);
        for key in keys {
            if key == GroupingKey::None || normalised.contains(&key) {
                continue;
            }
            if normalised.len() == MAX_LEVELS {
                break;
            }
            normalised.push(key);
        }
        GroupingKeys(normalised)
    }

    pub fn as_slice(&self) -> &[GroupingKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for GroupingKeys {
    type Err = GroupingError;

    /// Parses a comma-separated list such as `client, project,date`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keys = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(GroupingKey::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GroupingKeys::new(keys))
    }
}

impl fmt::Display for GroupingKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(GroupingKey::None.as_str());
        }
        let names: Vec<&str> = self.0.iter().map(GroupingKey::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

/// The label an entry falls under for `key`.
///
/// Total: a missing client, task or project yields its placeholder.
pub fn group_value(entry: &TimeEntry, key: GroupingKey) -> String {
    match key {
        GroupingKey::None => ROOT_KEY.to_string(),
        GroupingKey::Date => entry.date.clone(),
        GroupingKey::User => entry.user.clone(),
        GroupingKey::Client => placeholder(entry.client.as_deref(), NO_CLIENT),
        GroupingKey::Project => placeholder(Some(entry.project.as_str()), NO_PROJECT),
        GroupingKey::Task => placeholder(entry.task.as_deref(), NO_TASK),
    }
}

fn placeholder(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// One node of the grouping tree.
///
/// A group either holds sub-groups (inner levels) or entries (the deepest
/// level), never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<'a> {
    pub key: String,
    pub level: usize,
    pub entries: Vec<&'a TimeEntry>,
    pub sub_groups: Vec<Group<'a>>,
}

impl<'a> Group<'a> {
    pub fn new(key: String, level: usize) -> Self {
        Group {
            key,
            level,
            entries: Vec::new(),
            sub_groups: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_groups.is_empty()
    }

    /// Child group with the given label.
    pub fn sub_group(&self, key: &str) -> Option<&Group<'a>> {
        self.sub_groups.iter().find(|group| group.key == key)
    }

    /// Every entry under this group, depth first, in tree order.
    pub fn flatten(&self) -> Vec<&'a TimeEntry> {
        let mut all = self.entries.clone();
        for sub_group in &self.sub_groups {
            all.extend(sub_group.flatten());
        }
        all
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len() + self.sub_groups.iter().map(Group::entry_count).sum::<usize>()
    }

    /// Sum of every entry beneath this group.
    pub fn total(&self) -> Duration {
        sum_durations(self.flatten())
    }
}

/// Partitions `entries` into an ordered grouping tree.
///
/// With no keys the result is a single [`ROOT_KEY`] group holding every
/// entry, even when there are none. With keys and no entries the tree is
/// empty.
pub fn build_groups<'a, I>(entries: I, keys: &GroupingKeys) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    if keys.is_empty() {
        let mut root = Group::new(ROOT_KEY.to_string(), 0);
        root.entries.extend(entries);
        return vec![root];
    }

    let mut groups = Vec::new();
    for entry in entries {
        insert(&mut groups, entry, keys.as_slice(), 0);
    }
    groups
}

fn insert<'a>(groups: &mut Vec<Group<'a>>, entry: &'a TimeEntry, keys: &[GroupingKey], level: usize) {
    let Some((key, rest)) = keys.split_first() else {
        return;
    };
    let value = group_value(entry, *key);

    let position = match groups.iter().position(|group| group.key == value) {
        Some(position) => position,
        None => {
            groups.push(Group::new(value, level));
            groups.len() - 1
        }
    };

    let group = &mut groups[position];
    if rest.is_empty() {
        group.entries.push(entry);
    } else {
        insert(&mut group.sub_groups, entry, rest, level + 1);
    }
}
