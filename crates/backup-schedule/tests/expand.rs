#![allow(missing_docs)]

use backup_schedule::{
    BackupSchedule, BackupScheduleConfig, ExpandError, FrequencyUnit, expand, expand_value,
    try_expand, zero_time,
};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde_json::json;

fn full_config() -> BackupScheduleConfig {
    BackupScheduleConfig {
        frequency_interval: Some(5),
        frequency_unit: FrequencyUnit::Hour,
        keep_at_least_one_backup: true,
        retention_period_in_days: 10,
        start_time: Some("2020-01-01T00:00:00Z".to_string()),
    }
}

#[test]
fn empty_block_expands_to_zero_record() {
    let schedule = expand(&[]);
    assert_eq!(schedule, BackupSchedule::default());
    assert!(schedule.is_empty());

    assert_eq!(try_expand(&[]).unwrap(), BackupSchedule::default());
}

#[test]
fn full_block() {
    let schedule = expand(&[full_config()]);

    assert_eq!(schedule.frequency_interval, Some(5));
    assert_eq!(schedule.frequency_unit, Some(FrequencyUnit::Hour));
    assert_eq!(schedule.keep_at_least_one_backup, Some(true));
    assert_eq!(schedule.retention_period_in_days, Some(10));
    assert_eq!(
        schedule.start_time.unwrap(),
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(schedule.last_execution_time, None);

    assert_eq!(try_expand(&[full_config()]).unwrap(), schedule);
}

#[test]
fn unset_fields_take_defaults() {
    let configs = backup_schedule::decode_block(&json!([{ "frequency_interval": 5 }])).unwrap();
    let schedule = expand(&configs);

    assert_eq!(
        schedule,
        BackupSchedule {
            frequency_interval: Some(5),
            frequency_unit: Some(FrequencyUnit::Day),
            keep_at_least_one_backup: Some(false),
            retention_period_in_days: Some(30),
            start_time: None,
            last_execution_time: None,
        }
    );
}

#[test]
fn explicit_zero_is_kept() {
    let config = BackupScheduleConfig {
        frequency_interval: Some(0),
        retention_period_in_days: 0,
        ..BackupScheduleConfig::default()
    };

    let schedule = expand(&[config]);
    assert_eq!(schedule.frequency_interval, Some(0));
    assert_eq!(schedule.retention_period_in_days, Some(0));
}

#[test]
fn start_time_keeps_offset_instant() {
    let config = BackupScheduleConfig {
        start_time: Some("2021-06-15T12:30:00+02:00".to_string()),
        ..BackupScheduleConfig::default()
    };

    let start_time = expand(&[config]).start_time.unwrap();
    assert_eq!(start_time, Utc.with_ymd_and_hms(2021, 6, 15, 10, 30, 0).unwrap());
    assert_eq!(start_time.offset(), &FixedOffset::east_opt(2 * 60 * 60).unwrap());
}

#[test]
fn malformed_start_time_is_swallowed_by_expand() {
    let config = BackupScheduleConfig {
        frequency_interval: Some(1),
        start_time: Some("2020-01-01 noon".to_string()),
        ..BackupScheduleConfig::default()
    };

    let schedule = expand(&[config.clone()]);
    let start_time = schedule.start_time.unwrap();
    assert_eq!(start_time, Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(start_time, zero_time());
    assert_eq!(start_time.to_rfc3339(), "0001-01-01T00:00:00+00:00");
    assert_eq!(schedule.frequency_interval, Some(1));

    assert!(matches!(
        try_expand(&[config]),
        Err(ExpandError::StartTime { .. })
    ));
}

#[test]
fn wide_integers() {
    let config = BackupScheduleConfig {
        retention_period_in_days: i64::from(i32::MAX) + 1,
        ..BackupScheduleConfig::default()
    };

    assert_eq!(expand(&[config.clone()]).retention_period_in_days, None);
    assert!(matches!(
        try_expand(&[config]),
        Err(ExpandError::TooLarge {
            field: "retention_period_in_days",
            ..
        })
    ));
}

#[test]
fn expand_reads_first_block_only() {
    let second = BackupScheduleConfig {
        frequency_interval: Some(9),
        ..BackupScheduleConfig::default()
    };

    let schedule = expand(&[full_config(), second.clone()]);
    assert_eq!(schedule.frequency_interval, Some(5));

    assert!(matches!(
        try_expand(&[full_config(), second]),
        Err(ExpandError::TooManyBlocks(2))
    ));
}

#[test]
fn expand_untyped_block() {
    let block = json!([{
        "frequency_interval": 5,
        "frequency_unit": "Hour",
        "keep_at_least_one_backup": true,
        "retention_period_in_days": 10,
        "start_time": "2020-01-01T00:00:00Z",
    }]);

    assert_eq!(expand_value(&block).unwrap(), expand(&[full_config()]));
    assert_eq!(expand_value(&json!(null)).unwrap(), BackupSchedule::default());
}

#[test]
fn expand_untyped_block_with_nulls() {
    let block = json!([{ "frequency_interval": 5, "frequency_unit": null, "start_time": null }]);
    let schedule = expand_value(&block).unwrap();

    assert_eq!(schedule.frequency_unit, Some(FrequencyUnit::Day));
    assert_eq!(schedule.start_time, None);
}

#[test]
fn expand_untyped_block_reports_validation() {
    let block = json!([{ "frequency_interval": 1001, "start_time": "never" }]);

    let Err(ExpandError::Invalid(errors)) = expand_value(&block) else {
        panic!("block should be invalid");
    };
    assert_eq!(errors.len(), 2);
}

#[test]
fn request_wire_names() {
    let schedule = expand(&[full_config()]);
    let mut request = serde_json::to_value(&schedule).unwrap();

    let start_time = request
        .as_object_mut()
        .unwrap()
        .remove("startTime")
        .unwrap();
    assert_eq!(
        DateTime::parse_from_rfc3339(start_time.as_str().unwrap()).unwrap(),
        schedule.start_time.unwrap()
    );

    assert_eq!(
        request,
        json!({
            "frequencyInterval": 5,
            "frequencyUnit": "Hour",
            "keepAtLeastOneBackup": true,
            "retentionPeriodInDays": 10,
        })
    );

    let decoded: BackupSchedule =
        serde_json::from_value(serde_json::to_value(&schedule).unwrap()).unwrap();
    assert_eq!(decoded, schedule);

    let empty = serde_json::to_value(BackupSchedule::default()).unwrap();
    assert_eq!(empty, json!({}));
}
