//! Expand the backup schedule block into the App Service request shape.
//!

use core::num::TryFromIntError;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::{
    BackupSchedule, BackupScheduleConfig,
    config::{DecodeError, decode_block},
    schema::{
        BACKUP_SCHEDULE, FREQUENCY_INTERVAL, RETENTION_PERIOD_IN_DAYS, backup_schedule_schema,
    },
    validate::ValidationError,
};

/// Expand the block into a backup schedule, trusting it was validated against the schema.
///
/// An empty block expands to the zero record. A start time that is not RFC3339 becomes
/// `0001-01-01T00:00:00Z` and an integer wider than 32 bits is left unset; both are logged.
/// Use [`try_expand`] to have them reported instead.
pub fn expand(input: &[BackupScheduleConfig]) -> BackupSchedule {
    let Some(config) = input.first() else {
        return BackupSchedule::default();
    };

    let start_time = config.start_time.as_deref().map(|start_time| {
        DateTime::parse_from_rfc3339(start_time).unwrap_or_else(|error| {
            warn!("Start time '{start_time}' is not RFC3339, using the zero timestamp: {error}");
            zero_time()
        })
    });

    BackupSchedule {
        frequency_interval: config
            .frequency_interval
            .and_then(|value| narrow_or_warn(value, FREQUENCY_INTERVAL)),
        frequency_unit: Some(config.frequency_unit),
        keep_at_least_one_backup: Some(config.keep_at_least_one_backup),
        retention_period_in_days: narrow_or_warn(
            config.retention_period_in_days,
            RETENTION_PERIOD_IN_DAYS,
        ),
        start_time,
        last_execution_time: None,
    }
}

/// Expand the block into a backup schedule, reporting anything [`expand`] would swallow.
pub fn try_expand(input: &[BackupScheduleConfig]) -> Result<BackupSchedule, ExpandError> {
    let config = match input {
        [] => return Ok(BackupSchedule::default()),
        [config] => config,
        _ => return Err(ExpandError::TooManyBlocks(input.len())),
    };

    let frequency_interval = config
        .frequency_interval
        .map(|value| narrow(value, FREQUENCY_INTERVAL))
        .transpose()?;

    let retention_period_in_days =
        narrow(config.retention_period_in_days, RETENTION_PERIOD_IN_DAYS)?;

    let start_time = config
        .start_time
        .as_deref()
        .map(|start_time| {
            DateTime::parse_from_rfc3339(start_time).map_err(|source| ExpandError::StartTime {
                value: start_time.to_string(),
                source,
            })
        })
        .transpose()?;

    Ok(BackupSchedule {
        frequency_interval,
        frequency_unit: Some(config.frequency_unit),
        keep_at_least_one_backup: Some(config.keep_at_least_one_backup),
        retention_period_in_days: Some(retention_period_in_days),
        start_time,
        last_execution_time: None,
    })
}

/// Validate an untyped block against the schema, apply its defaults and expand it.
///
/// Validation warnings are logged.
pub fn expand_value(value: &Value) -> Result<BackupSchedule, ExpandError> {
    let schema = backup_schedule_schema();

    let diagnostics = schema.validate(BACKUP_SCHEDULE, value);
    for warning in &diagnostics.warnings {
        warn!("{warning}");
    }
    if !diagnostics.is_ok() {
        return Err(ExpandError::Invalid(diagnostics.errors));
    }

    let configs = decode_block(&schema.apply_defaults(value))?;

    try_expand(&configs)
}

/// The zero timestamp sent for a start time that could not be parsed, `0001-01-01T00:00:00Z`.
pub fn zero_time() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|time| time.and_utc().fixed_offset())
        .unwrap_or_default()
}

fn narrow(value: i64, field: &'static str) -> Result<i32, ExpandError> {
    i32::try_from(value).map_err(|source| ExpandError::TooLarge {
        field,
        value,
        source,
    })
}

fn narrow_or_warn(value: i64, field: &'static str) -> Option<i32> {
    match narrow(value, field) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!("Leaving {field} unset: {error}");
            None
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("The block is invalid:\n{}", display_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Failed to decode the block: {0}")]
    Decode(#[from] DecodeError),

    #[error("Expected at most one block, got {0}")]
    TooManyBlocks(usize),

    #[error("{field} {value} does not fit in 32 bits: {source}")]
    TooLarge {
        field: &'static str,
        value: i64,
        #[source]
        source: TryFromIntError,
    },

    #[error("Start time '{value}' is not RFC3339: {source}")]
    StartTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn display_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
