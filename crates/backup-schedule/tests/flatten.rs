#![allow(missing_docs)]

use backup_schedule::{BackupSchedule, BackupScheduleConfig, FrequencyUnit, expand, flatten};
use chrono::DateTime;

#[test]
fn unset_schedule_flattens_to_empty_block() {
    assert!(flatten(&BackupSchedule::default()).is_empty());
}

#[test]
fn unset_fields_flatten_to_defaults() {
    let schedule = BackupSchedule {
        frequency_interval: Some(3),
        ..BackupSchedule::default()
    };

    assert_eq!(
        flatten(&schedule),
        vec![BackupScheduleConfig {
            frequency_interval: Some(3),
            ..BackupScheduleConfig::default()
        }]
    );
}

#[test]
fn start_time_is_rfc3339() {
    let schedule = BackupSchedule {
        start_time: Some(DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z").unwrap()),
        ..BackupSchedule::default()
    };

    let configs = flatten(&schedule);
    assert_eq!(configs[0].start_time.as_deref(), Some("2020-01-01T00:00:00Z"));
}

#[test]
fn round_trip() {
    let configs = [
        BackupScheduleConfig::default(),
        BackupScheduleConfig {
            frequency_interval: Some(5),
            frequency_unit: FrequencyUnit::Hour,
            keep_at_least_one_backup: true,
            retention_period_in_days: 10,
            start_time: Some("2020-01-01T00:00:00Z".to_string()),
        },
        BackupScheduleConfig {
            frequency_interval: Some(1000),
            retention_period_in_days: 9_999_999,
            start_time: Some("2023-03-04T05:06:07.250-07:00".to_string()),
            ..BackupScheduleConfig::default()
        },
    ];

    for config in configs {
        let schedule = expand(&[config]);
        assert_eq!(expand(&flatten(&schedule)), schedule);
    }
}
