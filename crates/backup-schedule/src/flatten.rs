use chrono::SecondsFormat;

use crate::{BackupSchedule, BackupScheduleConfig};

/// Flatten a backup schedule back into the block it was expanded from.
///
/// An unset schedule flattens to an empty block, unset fields take their defaults.
pub fn flatten(schedule: &BackupSchedule) -> Vec<BackupScheduleConfig> {
    if schedule.is_empty() {
        return Vec::new();
    }

    let defaults = BackupScheduleConfig::default();

    vec![BackupScheduleConfig {
        frequency_interval: schedule.frequency_interval.map(i64::from),
        frequency_unit: schedule.frequency_unit.unwrap_or(defaults.frequency_unit),
        keep_at_least_one_backup: schedule
            .keep_at_least_one_backup
            .unwrap_or(defaults.keep_at_least_one_backup),
        retention_period_in_days: schedule
            .retention_period_in_days
            .map_or(defaults.retention_period_in_days, i64::from),
        start_time: schedule
            .start_time
            .map(|start_time| start_time.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
    }]
}
