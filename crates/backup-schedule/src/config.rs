//! The typed backup schedule block.
//!

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::FrequencyUnit;

/// A single `backup_schedule` block as written in a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackupScheduleConfig {
    /// How often a backup is taken, in `frequency_unit`s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_interval: Option<i64>,

    /// The unit of `frequency_interval`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency_unit: FrequencyUnit,

    /// Keep the latest backup even when it is older than the retention period.
    #[serde(default, deserialize_with = "null_as_default")]
    pub keep_at_least_one_backup: bool,

    /// How many days backups are kept for.
    #[serde(
        default = "default_retention_period_in_days",
        deserialize_with = "null_as_default_retention_period"
    )]
    pub retention_period_in_days: i64,

    /// When the schedule starts, as an RFC3339 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl Default for BackupScheduleConfig {
    fn default() -> Self {
        Self {
            frequency_interval: None,
            frequency_unit: FrequencyUnit::default(),
            keep_at_least_one_backup: false,
            retention_period_in_days: default_retention_period_in_days(),
            start_time: None,
        }
    }
}

fn default_retention_period_in_days() -> i64 {
    30
}

// `null` is an unset field, matching how the schema validates it.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_retention_period<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_retention_period_in_days))
}

/// Decode an untyped `backup_schedule` block into its typed records.
///
/// `null` is an unset block and decodes to no records. A `null` field takes its default.
pub fn decode_block(value: &Value) -> Result<Vec<BackupScheduleConfig>, DecodeError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                BackupScheduleConfig::deserialize(item)
                    .map_err(|source| DecodeError::Element { index, source })
            })
            .collect(),
        _ => Err(DecodeError::NotList),
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("The block was not a list")]
    NotList,

    #[error("Failed to decode element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
