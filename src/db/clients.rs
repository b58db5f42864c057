use super::db::Db;
use crate::libs::lookup::Client;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_ACTIVE_CLIENTS: &str = "SELECT id, name FROM tt_clients WHERE status = 1 ORDER BY name";
const SELECT_CLIENT: &str = "SELECT id, name FROM tt_clients WHERE id = ?";

pub struct Clients {
    pub conn: Connection,
}

impl Clients {
    pub fn new() -> Result<Clients> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Clients {
        Clients { conn: db.conn }
    }

    pub fn fetch_active(&self) -> Result<Vec<Client>> {
        let mut stmt = self.conn.prepare(SELECT_ACTIVE_CLIENTS)?;
        let client_iter = stmt.query_map([], |row| {
            Ok(Client {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut clients = Vec::new();
        for client in client_iter {
            clients.push(client?);
        }

        Ok(clients)
    }

    pub fn get(&self, id: i64) -> Result<Option<Client>> {
        let client = self
            .conn
            .query_row(SELECT_CLIENT, params![id], |row| {
                Ok(Client {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;

        Ok(client)
    }
}
