//! Domain modules of the timesheet tool.
//!
//! - **Core Infrastructure**: configuration, data storage, messaging, errors
//! - **Report Engine**: entries, durations, grouping, tree rendering, report assembly
//! - **Calculations**: team summary, profit, progress
//! - **Output**: console view, HTML print view, file export, formatting

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod grouping;
pub mod html;
pub mod lookup;
pub mod messages;
pub mod profit;
pub mod progress;
pub mod report;
pub mod team;
pub mod tree;
pub mod view;
