//! # backup-schedule-check
//! Validate and expand the backup schedule of a definition file.
//!

mod check;
mod config;

pub use check::check;
pub use config::{Config, DEFAULT_CONFIG_FILE, LoadConfigError, WriteConfigError};
