//! # backup-schedule-check
//! Validate the backup schedule of a definition file and print the request it expands to.
//!

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use backup_schedule_check::{Config, DEFAULT_CONFIG_FILE, check};
use mimalloc::MiMalloc;
use shared::{Failure, LoggerConfig, init_logger};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let argument = std::env::args().nth(1);

    // Initialize config if args include 'init'.
    if argument.as_deref() == Some("init") {
        let _logger =
            init_logger(&LoggerConfig::default()).or_log_and_panic("Could not create logger");

        Config::write_template(Path::new(DEFAULT_CONFIG_FILE))
            .or_log_and_panic("Could not create config file");

        info!("Wrote {DEFAULT_CONFIG_FILE}");
        return ExitCode::SUCCESS;
    }

    let path = argument.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);

    // Load config, logging with the defaults if it cannot be read.
    let config = Config::load_toml(path.clone());
    let logger_config = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let _logger = init_logger(&logger_config).or_log_and_panic("Could not create logger");

    let Some(config) = config.or_log(&format!("Could not load config {path:?}")) else {
        return ExitCode::FAILURE;
    };

    let Ok(schedule) = check(&config) else {
        return ExitCode::FAILURE;
    };

    let request =
        serde_json::to_string_pretty(&schedule).or_log_and_panic("Could not serialize request");
    println!("{request}");

    ExitCode::SUCCESS
}
