use super::db::Db;
use crate::libs::lookup::User;
use anyhow::Result;
use rusqlite::Connection;

const SELECT_ACTIVE_USERS: &str = "SELECT id, login, name, rate FROM tt_users WHERE status = 1 ORDER BY COALESCE(name, login)";

pub struct Users {
    pub conn: Connection,
}

impl Users {
    pub fn new() -> Result<Users> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Users {
        Users { conn: db.conn }
    }

    pub fn fetch_active(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(SELECT_ACTIVE_USERS)?;
        let user_iter = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                login: row.get(1)?,
                name: row.get(2)?,
                rate: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
            })
        })?;

        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }

        Ok(users)
    }
}
