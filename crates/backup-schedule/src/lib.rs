//! # backup-schedule
//! Schema, validation and expansion of the App Service `backup_schedule` block.
//!

mod config;
mod expand;
mod flatten;
mod frequency_unit;
mod request;
pub mod schema;
mod suppress;
pub mod validate;

pub use config::{BackupScheduleConfig, DecodeError, decode_block};
pub use expand::{ExpandError, expand, expand_value, try_expand, zero_time};
pub use flatten::flatten;
pub use frequency_unit::{FrequencyUnit, ParseFrequencyUnitError};
pub use request::BackupSchedule;
pub use schema::backup_schedule_schema;
pub use suppress::suppress_rfc3339_time;
pub use validate::{
    Diagnostics, ValidationError, validate_frequency_interval, validate_retention_period,
};
