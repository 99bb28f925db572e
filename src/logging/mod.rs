// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use log::LevelFilter;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Open the log file for appending, creating parent directories as needed
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Ok(file)
}

/// Route the `log` facade to the configured file. The terminal is left to the
/// interactive UI.
pub fn init(config: &Config) -> Result<()> {
    if config.log_level == LevelFilter::Off {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    }

    let file = open_log_file(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!("Logging to {} at level {}", config.log_file.display(), config.log_level);
    Ok(())
}

// Emit warnings gathered before the logger existed
pub fn report_config_warnings(warnings: &[String]) {
    for warning in warnings {
        log::warn!("{}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use crate::test_utils::capture_logs;

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("passgen.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        // appending to an existing file works too
        open_log_file(&path).unwrap();
    }

    #[test]
    fn config_warnings_reach_the_logger() {
        let logs = capture_logs();
        let (_, warnings) = Config::from_lookup(|key| match key {
            "COPY_RESET_MS" => Some("-17".to_string()),
            "LOG_LEVEL" => Some("chatty".to_string()),
            "LOG_FILE" => Some("/tmp/passgen.log".to_string()),
            _ => None,
        });

        report_config_warnings(&warnings);

        assert!(logs.contains(Level::Warn, "Ignoring invalid COPY_RESET_MS '-17'"));
        assert!(logs.contains(Level::Warn, "Ignoring unknown LOG_LEVEL 'chatty'"));
    }
}
