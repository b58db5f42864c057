//! Reference data listings used to find the ids other commands take.

use crate::{
    db::{clients::Clients, entries::Entries, projects::Projects, tasks::Tasks, users::Users},
    libs::{messages::Message, view::View},
    msg_info,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupKind {
    Users,
    Projects,
    Clients,
    Tasks,
    /// First and last date with an active entry
    Range,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(value_enum)]
    kind: LookupKind,

    /// Only projects bound to this client id
    #[arg(long)]
    client: Option<i64>,
}

pub fn cmd(args: LookupArgs) -> Result<()> {
    match args.kind {
        LookupKind::Users => {
            let users = Users::new()?.fetch_active()?;
            if users.is_empty() {
                msg_info!(Message::LookupEmpty("users".to_string()));
            } else {
                View::users(&users)?;
            }
        }
        LookupKind::Projects => {
            let projects = match args.client {
                Some(client_id) => Projects::new()?.fetch_by_client(client_id)?,
                None => Projects::new()?.fetch_active()?,
            };
            if projects.is_empty() {
                msg_info!(Message::LookupEmpty("projects".to_string()));
            } else {
                View::projects(&projects)?;
            }
        }
        LookupKind::Clients => {
            let clients = Clients::new()?.fetch_active()?;
            if clients.is_empty() {
                msg_info!(Message::LookupEmpty("clients".to_string()));
            } else {
                View::clients(&clients)?;
            }
        }
        LookupKind::Tasks => {
            let tasks = Tasks::new()?.fetch_active()?;
            if tasks.is_empty() {
                msg_info!(Message::LookupEmpty("tasks".to_string()));
            } else {
                View::tasks(&tasks)?;
            }
        }
        LookupKind::Range => match Entries::new()?.date_range()? {
            Some((from, to)) => msg_info!(Message::DateRange(from.to_string(), to.to_string())),
            None => msg_info!(Message::NoDateRange),
        },
    }

    Ok(())
}
