use super::db::Db;
use crate::libs::entry::{EntryFilter, EntryRecord};
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

/// Custom field holding the task or bug number.
pub const TASK_NUMBER_FIELD_ID: i64 = 2;

const SELECT_ENTRIES: &str = "SELECT
    l.id,
    l.user_id,
    u.name AS user_name,
    u.login AS user_login,
    COALESCE(DATE(l.date), l.date) AS date,
    l.start,
    l.duration,
    l.client_id,
    c.name AS client_name,
    l.project_id,
    p.name AS project_name,
    l.task_id,
    t.name AS task_name,
    cf.value AS task_number,
    l.comment,
    l.billable
FROM tt_log l
LEFT JOIN tt_users u ON l.user_id = u.id
LEFT JOIN tt_projects p ON l.project_id = p.id
LEFT JOIN tt_tasks t ON l.task_id = t.id
LEFT JOIN tt_clients c ON l.client_id = c.id
LEFT JOIN tt_custom_field_log cf ON cf.log_id = l.id AND cf.field_id = ? AND cf.status = 1";
const ORDER_ENTRIES: &str = "ORDER BY DATE(l.date) ASC, l.created ASC, l.id ASC";
const SELECT_DATE_RANGE: &str = "SELECT DATE(MIN(date)), DATE(MAX(date)) FROM tt_log WHERE status = 1";

pub struct Entries {
    pub conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Entries> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Entries {
        Entries { conn: db.conn }
    }

    /// Active entries matching `filter`, ordered by date then creation time.
    pub fn fetch(&self, filter: &EntryFilter) -> Result<Vec<EntryRecord>> {
        let mut clauses = vec!["l.status = 1".to_string()];
        let mut params = vec![Value::Integer(TASK_NUMBER_FIELD_ID)];

        if let Some(user_id) = filter.user_id {
            clauses.push("l.user_id = ?".to_string());
            params.push(Value::Integer(user_id));
        }
        if !filter.project_ids.is_empty() {
            clauses.push(format!("l.project_id IN ({})", vec!["?"; filter.project_ids.len()].join(", ")));
            params.extend(filter.project_ids.iter().map(|id| Value::Integer(*id)));
        }
        if let Some(task_id) = filter.task_id {
            clauses.push("l.task_id = ?".to_string());
            params.push(Value::Integer(task_id));
        }
        if let Some(client_id) = filter.client_id {
            clauses.push("l.client_id = ?".to_string());
            params.push(Value::Integer(client_id));
        }
        if filter.billable_only {
            clauses.push("l.billable = 1".to_string());
        }
        if let Some(date_from) = filter.date_from {
            clauses.push("DATE(l.date) >= ?".to_string());
            params.push(Value::Text(date_from.format("%Y-%m-%d").to_string()));
        }
        if let Some(date_to) = filter.date_to {
            clauses.push("DATE(l.date) <= ?".to_string());
            params.push(Value::Text(date_to.format("%Y-%m-%d").to_string()));
        }

        let sql = format!("{} WHERE {} {}", SELECT_ENTRIES, clauses.join(" AND "), ORDER_ENTRIES);
        msg_debug!(format!("Entry query: {} {:?}", sql, params));

        let mut stmt = self.conn.prepare(&sql)?;
        let entry_iter = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(EntryRecord {
                id: row.get(0)?,
                user_id: row.get(1)?,
                user_name: row.get(2)?,
                user_login: row.get(3)?,
                date: row.get(4)?,
                start: row.get(5)?,
                duration: row.get(6)?,
                client_id: row.get(7)?,
                client_name: row.get(8)?,
                project_id: row.get(9)?,
                project_name: row.get(10)?,
                task_id: row.get(11)?,
                task_name: row.get(12)?,
                task_number: row.get(13)?,
                comment: row.get(14)?,
                billable: row.get::<_, Option<i64>>(15)?.unwrap_or(0) == 1,
            })
        })?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }

        Ok(entries)
    }

    /// Earliest and latest dates among active entries, if any.
    pub fn date_range(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let range = self
            .conn
            .query_row(SELECT_DATE_RANGE, [], |row| {
                Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?))
            })
            .optional()?;

        match range {
            Some((Some(min), Some(max))) => Ok(Some((
                NaiveDate::parse_from_str(&min, "%Y-%m-%d")?,
                NaiveDate::parse_from_str(&max, "%Y-%m-%d")?,
            ))),
            _ => Ok(None),
        }
    }
}
