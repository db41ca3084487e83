use std::{
    fs, io,
    path::{Path, PathBuf},
};

use backup_schedule::schema::{
    FREQUENCY_INTERVAL, FREQUENCY_UNIT, KEEP_AT_LEAST_ONE_BACKUP, RETENTION_PERIOD_IN_DAYS,
    START_TIME,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::LoggerConfig;
use thiserror::Error;

/// The file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "./config.toml";

/// A definition file holding a backup schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where and how much to log.
    #[serde(default)]
    pub logging: LoggerConfig,

    /// The untyped `backup_schedule` block, checked against the schema.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub backup_schedule: Value,
}

impl Config {
    /// Tries to load a config from a toml file.
    pub fn load_toml(file_path: PathBuf) -> Result<Self, LoadConfigError> {
        if !file_path.exists() {
            return Err(LoadConfigError::NoFile);
        }

        let contents = fs::read_to_string(file_path).map_err(LoadConfigError::Read)?;
        let config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Write the default config to a toml file as a template to edit.
    pub fn write_template(file_path: &Path) -> Result<(), WriteConfigError> {
        let contents = toml::to_string_pretty(&Self::default())?;
        fs::write(file_path, contents).map_err(WriteConfigError::Write)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let block = Map::from_iter([
            (FREQUENCY_INTERVAL.to_string(), Value::from(1)),
            (FREQUENCY_UNIT.to_string(), Value::from("Day")),
            (KEEP_AT_LEAST_ONE_BACKUP.to_string(), Value::from(true)),
            (RETENTION_PERIOD_IN_DAYS.to_string(), Value::from(30)),
            (START_TIME.to_string(), Value::from("2024-01-01T00:00:00Z")),
        ]);

        Self {
            logging: LoggerConfig::default(),
            backup_schedule: Value::Array(vec![Value::Object(block)]),
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("The file does not exist.")]
    NoFile,

    #[error("Failed to read the file:\n{0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to deserialize the file:\n{0}")]
    Deserialize(#[from] toml::de::Error),
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum WriteConfigError {
    #[error("Failed to serialize the config:\n{0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write the file:\n{0}")]
    Write(#[source] io::Error),
}
