use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::visitors::VisitorsConfig;
use crate::time_window::TimeWindow;

const LOCAL_CONFIG_PATH: &str = "visitor-counter.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/visitor-counter/config.toml";

/// Upper bound on `visitors.retention_days`. Keeps the purge cutoff within
/// the representable timestamp range.
pub const MAX_RETENTION_DAYS: u32 = 36_500;

/// Main configuration structure for Visitor Counter
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address, pages)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Counting, retention and rendering settings
    #[serde(default)]
    pub visitors: VisitorsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. visitor-counter.toml in current directory
    /// 3. /etc/visitor-counter/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Unreadable {
                path: path.to_string(),
                source,
            })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Retention as a typed span, compared against counting windows.
    pub fn retention_horizon(&self) -> Duration {
        Duration::days(i64::from(self.visitors.retention_days))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if !DatabaseConfig::is_valid_table_prefix(&self.database.table_prefix) {
            return Err(ConfigError::Validation(format!(
                "Table prefix '{}' may only contain ASCII letters, digits and '_'",
                self.database.table_prefix
            )));
        }

        let largest = TimeWindow::largest();
        if self.retention_horizon() < largest.duration() {
            return Err(ConfigError::Validation(format!(
                "Retention of {} days is shorter than the '{}' window ({} days)",
                self.visitors.retention_days,
                largest,
                largest.duration().num_days()
            )));
        }

        if self.visitors.retention_days > MAX_RETENTION_DAYS {
            return Err(ConfigError::Validation(format!(
                "Retention of {} days exceeds the maximum of {} days",
                self.visitors.retention_days, MAX_RETENTION_DAYS
            )));
        }

        if self.visitors.purge_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Purge interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
