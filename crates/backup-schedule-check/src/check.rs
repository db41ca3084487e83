use backup_schedule::{BackupSchedule, ExpandError, expand_value};
use tracing::{error, info};

use crate::Config;

/// Validate the config's backup schedule and expand it, logging the outcome.
pub fn check(config: &Config) -> Result<BackupSchedule, ExpandError> {
    let result = expand_value(&config.backup_schedule);

    match &result {
        Ok(schedule) if schedule.is_empty() => info!("No backup schedule is declared"),
        Ok(schedule) => info!(
            "Backup schedule is valid: every {} {}, kept for {} days",
            schedule.frequency_interval.unwrap_or_default(),
            schedule.frequency_unit.unwrap_or_default(),
            schedule.retention_period_in_days.unwrap_or_default(),
        ),
        Err(ExpandError::Invalid(errors)) => {
            for error in errors {
                error!("{error}");
            }
        }
        Err(error) => error!("{error}"),
    }

    result
}
