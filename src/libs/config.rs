//! Configuration management for the zonal application.
//!
//! Settings live in `config.json` inside the platform data directory. A missing
//! file is not an error: every section is optional and falls back to its
//! defaults, so the tool works without any setup.
//!
//! ## Configuration Structure
//!
//! - **Dashboard**: refresh interval of the live panel and its default sort
//! - **Export**: default file name for the history CSV
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use zonal::libs::config::Config;
//!
//! let config = Config::read()?;
//! let dashboard = config.dashboard.clone().unwrap_or_default();
//! println!("Tick every {} ms", dashboard.tick_interval_ms);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::export::DEFAULT_EXPORT_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::sort::{SortConfig, SortDirection, SortKey};
use crate::libs::ticker::MIN_TICK_INTERVAL;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Refresh interval of the live panel in milliseconds.
    pub tick_interval_ms: u64,

    pub sort_key: SortKey,

    pub sort_direction: SortDirection,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    pub file_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let sort = SortConfig::default();
        DashboardConfig {
            tick_interval_ms: 1000,
            sort_key: sort.key,
            sort_direction: sort.direction,
        }
    }
}

impl DashboardConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms).max(MIN_TICK_INTERVAL)
    }

    pub fn sort(&self) -> SortConfig {
        SortConfig::new(self.sort_key, self.sort_direction)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
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

    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn dashboard_or_default(&self) -> DashboardConfig {
        self.dashboard.clone().unwrap_or_default()
    }

    pub fn export_or_default(&self) -> ExportConfig {
        self.export.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "dashboard".to_string(),
                name: Message::ConfigModuleDashboard.to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: Message::ConfigModuleExport.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "dashboard" => {
                    let default = config.dashboard_or_default();
                    msg_print!(Message::ConfigModuleDashboard);

                    let keys = [SortKey::Status, SortKey::RemainingTime, SortKey::TargetTime, SortKey::Name];
                    let directions = [SortDirection::Ascending, SortDirection::Descending];

                    let tick_interval_ms = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTickInterval.to_string())
                        .default(default.tick_interval_ms)
                        .interact_text()?;

                    let key_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSortKey.to_string())
                        .items(&keys.iter().map(|k| format!("{:?}", k)).collect::<Vec<_>>())
                        .default(keys.iter().position(|k| *k == default.sort_key).unwrap_or(0))
                        .interact()?;

                    let direction_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSortDirection.to_string())
                        .items(&directions.iter().map(|d| format!("{:?}", d)).collect::<Vec<_>>())
                        .default(directions.iter().position(|d| *d == default.sort_direction).unwrap_or(0))
                        .interact()?;

                    config.dashboard = Some(DashboardConfig {
                        tick_interval_ms,
                        sort_key: keys[key_index],
                        sort_direction: directions[direction_index],
                    });
                }
                "export" => {
                    let default = config.export_or_default();
                    msg_print!(Message::ConfigModuleExport);
                    config.export = Some(ExportConfig {
                        file_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptExportFileName.to_string())
                            .default(default.file_name)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
