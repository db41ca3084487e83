//! # Shared
//! Logging and failure handling shared by the workspace binaries.
//!

#![warn(missing_docs)]

mod failure;
mod logger;

pub use failure::{Failure, log_and_panic};
pub use logger::{LoggerConfig, LoggerError, init_logger};
