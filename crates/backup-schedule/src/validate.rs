//! Field validators for the backup schedule block.
//!

use chrono::DateTime;
use thiserror::Error;

use crate::FrequencyUnit;

/// The accepted range for `frequency_interval`.
pub const FREQUENCY_INTERVAL_RANGE: IntRange = IntRange::new(0, 1000);

/// The accepted range for `retention_period_in_days`.
pub const RETENTION_PERIOD_RANGE: IntRange = IntRange::new(0, 9_999_999);

/// The warnings and errors produced by validating a value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Messages that do not block an apply.
    pub warnings: Vec<String>,

    /// Errors that block an apply.
    pub errors: Vec<ValidationError>,
}

impl Diagnostics {
    /// Diagnostics containing a single error.
    pub fn error(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// If no errors were reported.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append the warnings and errors of another validation.
    pub fn extend(&mut self, other: Self) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}

/// An inclusive range an integer field must lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    /// Lowest accepted value.
    pub min: i64,

    /// Highest accepted value.
    pub max: i64,
}

impl IntRange {
    /// Create a new range, `min` and `max` are both accepted.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Returns if the value lies in the range.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check a value, reporting an error keyed by `key` when it is out of range.
    pub fn check(&self, value: i64, key: &str) -> Diagnostics {
        if self.contains(value) {
            return Diagnostics::default();
        }

        Diagnostics::error(ValidationError::OutOfRange {
            key: key.to_string(),
            min: self.min,
            max: self.max,
            got: value,
        })
    }
}

/// Validate `frequency_interval` lies in `[0, 1000]`.
pub fn validate_frequency_interval(value: i64, key: &str) -> Diagnostics {
    FREQUENCY_INTERVAL_RANGE.check(value, key)
}

/// Validate `retention_period_in_days` lies in `[0, 9999999]`.
pub fn validate_retention_period(value: i64, key: &str) -> Diagnostics {
    RETENTION_PERIOD_RANGE.check(value, key)
}

/// Validate a frequency unit is one of the accepted names. Case sensitive.
pub fn validate_frequency_unit(value: &str, key: &str) -> Diagnostics {
    if value.parse::<FrequencyUnit>().is_ok() {
        return Diagnostics::default();
    }

    Diagnostics::error(ValidationError::NotInSet {
        key: key.to_string(),
        expected: FrequencyUnit::NAMES,
        got: value.to_string(),
    })
}

/// Validate a string is a strict RFC3339 timestamp.
pub fn validate_rfc3339_time(value: &str, key: &str) -> Diagnostics {
    match DateTime::parse_from_rfc3339(value) {
        Ok(_) => Diagnostics::default(),
        Err(source) => Diagnostics::error(ValidationError::Rfc3339 {
            key: key.to_string(),
            value: value.to_string(),
            source,
        }),
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{key:?} must be between {min} and {max} inclusive, got: {got}")]
    OutOfRange {
        key: String,
        min: i64,
        max: i64,
        got: i64,
    },

    #[error("expected {key} to be one of {expected:?}, got {got}")]
    NotInSet {
        key: String,
        expected: &'static [&'static str],
        got: String,
    },

    #[error("{key:?} has the invalid RFC3339 date format {value:?}: {source}")]
    Rfc3339 {
        key: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{key:?} must be of type {expected}, got {got}")]
    WrongType {
        key: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("{key:?} supports at most {max} item(s), got {got}")]
    TooManyItems { key: String, max: usize, got: usize },

    #[error("{key:?} is required")]
    Required { key: String },

    #[error("{key:?} is not an accepted field")]
    UnknownField { key: String },
}
