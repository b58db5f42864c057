use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Tables of the time-tracker store. Created when missing so an empty file is
/// a valid, empty store.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tt_users (
    id INTEGER NOT NULL PRIMARY KEY,
    login TEXT NOT NULL,
    name TEXT,
    group_id INTEGER NOT NULL DEFAULT 1,
    rate REAL NOT NULL DEFAULT 0,
    email TEXT,
    status INTEGER NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS tt_clients (
    id INTEGER NOT NULL PRIMARY KEY,
    group_id INTEGER NOT NULL DEFAULT 1,
    name TEXT NOT NULL,
    address TEXT,
    status INTEGER NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS tt_projects (
    id INTEGER NOT NULL PRIMARY KEY,
    group_id INTEGER NOT NULL DEFAULT 1,
    name TEXT NOT NULL,
    description TEXT,
    status INTEGER NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS tt_tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    group_id INTEGER NOT NULL DEFAULT 1,
    name TEXT NOT NULL,
    description TEXT,
    status INTEGER NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS tt_client_project_binds (
    client_id INTEGER NOT NULL,
    project_id INTEGER NOT NULL,
    PRIMARY KEY (client_id, project_id)
);
CREATE TABLE IF NOT EXISTS tt_log (
    id INTEGER NOT NULL PRIMARY KEY,
    user_id INTEGER NOT NULL,
    group_id INTEGER NOT NULL DEFAULT 1,
    date TEXT NOT NULL,
    start TEXT,
    duration TEXT,
    client_id INTEGER,
    project_id INTEGER,
    task_id INTEGER,
    comment TEXT,
    billable INTEGER NOT NULL DEFAULT 0,
    approved INTEGER NOT NULL DEFAULT 0,
    paid INTEGER NOT NULL DEFAULT 0,
    created TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    modified TIMESTAMP,
    status INTEGER NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS tt_custom_field_log (
    id INTEGER NOT NULL PRIMARY KEY,
    log_id INTEGER NOT NULL,
    field_id INTEGER NOT NULL,
    value TEXT,
    status INTEGER NOT NULL DEFAULT 1
);
CREATE INDEX IF NOT EXISTS idx_tt_log_date ON tt_log (date);
CREATE INDEX IF NOT EXISTS idx_tt_custom_field_log_log ON tt_custom_field_log (log_id, field_id);
";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured time-tracker database.
    pub fn new() -> Result<Db> {
        let path = Config::read()?.database_path()?;
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path).with_context(|| Message::DatabaseOpenFailed(path.display().to_string()))?;
        conn.execute_batch(SCHEMA)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn })
    }
}
