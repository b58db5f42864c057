//! Read access to the time-tracker SQLite store.
//!
//! Every repository wraps a [`db::Db`] connection. `new()` opens the
//! configured database; `from_db()` reuses an already opened one, which is
//! how tests point repositories at a temporary file.
//!
//! ```rust,no_run
//! use timesheet::db::entries::Entries;
//! use timesheet::libs::entry::EntryFilter;
//!
//! let entries = Entries::new()?.fetch(&EntryFilter::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and schema creation.
pub mod db;

/// Time log rows joined with their user, client, project and task.
pub mod entries;

pub mod clients;
pub mod projects;
pub mod tasks;
pub mod users;
