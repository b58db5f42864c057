//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in the data directory
//! (`config.json`). Every section is optional: a missing file or section means
//! built-in defaults apply, so the tool works without running `init` first.
//!
//! ```json
//! {
//!   "database": { "path": "/srv/timetracker/timesheet.db" },
//!   "report": { "grouping": "client,project", "totals_only": false, "title": "Timesheet Report" },
//!   "profit": { "client_rate": 95.0, "user_rates": { "3": 42.5 } }
//! }
//! ```
//!
//! The database location is resolved as `TIMESHEET_DB` environment variable,
//! then `database.path`, then `timesheet.db` in the data directory.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "timesheet.db";
pub const DB_ENV_VAR: &str = "TIMESHEET_DB";
pub const DEFAULT_REPORT_TITLE: &str = "Timesheet Report";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Defaults applied to `report` and `export` when flags are omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Comma-separated grouping keys, e.g. `client,project`.
    #[serde(default)]
    pub grouping: String,
    #[serde(default)]
    pub totals_only: bool,
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ProfitConfig {
    #[serde(default)]
    pub client_rate: f64,
    /// Hourly cost per user id.
    #[serde(default)]
    pub user_rates: BTreeMap<i64, f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<ProfitConfig>,
}

fn default_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            grouping: String::new(),
            totals_only: false,
            title: default_title(),
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from `path`, or defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(path.display().to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Location of the time-tracker database.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.database {
            Some(database) => Ok(database.path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    pub fn report_defaults(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    pub fn profit_defaults(&self) -> ProfitConfig {
        self.profit.clone().unwrap_or_default()
    }

    /// Interactive setup of the selected configuration sections.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
            ConfigModule {
                key: "report".to_string(),
                name: Message::ConfigModuleReport.to_string(),
            },
            ConfigModule {
                key: "profit".to_string(),
                name: Message::ConfigModuleProfit.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "database" => {
                    let default = config.database_path()?;
                    msg_print!(Message::ConfigModuleDatabase);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default.display().to_string())
                        .interact_text()?;
                    config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
                }
                "report" => {
                    let default = config.report_defaults();
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(ReportConfig {
                        grouping: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultGrouping.to_string())
                            .default(default.grouping)
                            .allow_empty(true)
                            .interact_text()?,
                        totals_only: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTotalsOnly.to_string())
                            .default(default.totals_only)
                            .interact()?,
                        title: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReportTitle.to_string())
                            .default(default.title)
                            .interact_text()?,
                    });
                }
                "profit" => {
                    let default = config.profit_defaults();
                    msg_print!(Message::ConfigModuleProfit);
                    config.profit = Some(ProfitConfig {
                        client_rate: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptClientRate.to_string())
                            .default(default.client_rate)
                            .interact_text()?,
                        user_rates: default.user_rates,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
