use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::FrequencyUnit;

/// The backup schedule of an App Service backup request.
///
/// Every field is optional so an unset field can be told apart from an explicit zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSchedule {
    /// How often a backup is taken, in `frequency_unit`s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_interval: Option<i32>,

    /// The unit of `frequency_interval`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_unit: Option<FrequencyUnit>,

    /// Keep the latest backup even when it is older than the retention period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_at_least_one_backup: Option<bool>,

    /// How many days backups are kept for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_period_in_days: Option<i32>,

    /// When the schedule starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<FixedOffset>>,

    /// When the last backup ran. Read only, set by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution_time: Option<DateTime<FixedOffset>>,
}

impl BackupSchedule {
    /// Returns if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
