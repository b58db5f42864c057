use super::db::Db;
use crate::libs::lookup::Task;
use anyhow::Result;
use rusqlite::Connection;

const SELECT_ACTIVE_TASKS: &str = "SELECT id, name, description FROM tt_tasks WHERE status = 1 ORDER BY name";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn }
    }

    pub fn fetch_active(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_ACTIVE_TASKS)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }
}
