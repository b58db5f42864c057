use super::db::Db;
use crate::libs::lookup::Project;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_ACTIVE_PROJECTS: &str = "SELECT id, name, description FROM tt_projects WHERE status = 1 ORDER BY name";
const SELECT_CLIENT_PROJECTS: &str = "SELECT p.id, p.name, p.description FROM tt_projects p
    INNER JOIN tt_client_project_binds b ON p.id = b.project_id
    WHERE b.client_id = ? AND p.status = 1
    ORDER BY p.name";
const SELECT_PROJECT_LIKE: &str = "SELECT id FROM tt_projects WHERE name LIKE ? ORDER BY id LIMIT 1";

/// Name patterns identifying the leave project.
pub const LEAVE_PROJECT_PATTERNS: [&str; 2] = ["%Leave%", "%Out of Office%"];
/// Name patterns identifying the public holiday project.
pub const HOLIDAY_PROJECT_PATTERNS: [&str; 2] = ["%Public Holiday%", "%Holiday%"];

pub struct Projects {
    pub conn: Connection,
}

impl Projects {
    pub fn new() -> Result<Projects> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Projects {
        Projects { conn: db.conn }
    }

    pub fn fetch_active(&self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_ACTIVE_PROJECTS)?;
        let project_iter = stmt.query_map([], map_project)?;

        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }

        Ok(projects)
    }

    /// Active projects bound to a client.
    pub fn fetch_by_client(&self, client_id: i64) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_CLIENT_PROJECTS)?;
        let project_iter = stmt.query_map(params![client_id], map_project)?;

        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }

        Ok(projects)
    }

    /// Id of the first project whose name matches any of the `LIKE` patterns,
    /// trying patterns in order.
    pub fn find_by_name_like(&self, patterns: &[&str]) -> Result<Option<i64>> {
        for pattern in patterns {
            let id = self
                .conn
                .query_row(SELECT_PROJECT_LIKE, params![pattern], |row| row.get::<_, i64>(0))
                .optional()?;
            if id.is_some() {
                return Ok(id);
            }
        }
        Ok(None)
    }
}

fn map_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}
