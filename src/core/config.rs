// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{clamp_length, GenerationConfig};

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Clipboard
    pub copy_reset: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            default_include_numbers: true,
            default_include_symbols: true,

            // Clipboard
            copy_reset: Duration::from_millis(2000),

            // Logging
            log_level: LevelFilter::Info,
            log_file: crate::utils::get_app_data_dir()
                .map(|dir| dir.join("rust_passgen.log"))
                .unwrap_or_else(|| PathBuf::from("./rust_passgen.log")),
        }
    }
}

impl Config {
    // Load configuration from environment variables.
    // Warnings are returned rather than logged; the logger is not up yet.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build a config from any key/value source; unparsable values keep the default
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => {
                    let clamped = clamp_length(length);
                    if clamped != length {
                        warnings.push(format!("DEFAULT_PASSWORD_LENGTH {} out of range, using {}", length, clamped));
                    }
                    config.default_password_length = clamped;
                }
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_NUMBERS") {
            match val.parse() {
                Ok(include) => config.default_include_numbers = include,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_INCLUDE_NUMBERS '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            match val.parse() {
                Ok(include) => config.default_include_symbols = include,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_INCLUDE_SYMBOLS '{}'", val)),
            }
        }

        // Clipboard
        if let Some(val) = lookup("COPY_RESET_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.copy_reset = Duration::from_millis(ms),
                Err(_) => warnings.push(format!("Ignoring invalid COPY_RESET_MS '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => warnings.push(format!("Ignoring unknown LOG_LEVEL '{}'", level)),
            }
        }

        match lookup("LOG_FILE") {
            Some(file) => config.log_file = PathBuf::from(file),
            None => {
                if crate::utils::get_app_data_dir().is_none() {
                    warnings.push(format!(
                        "Could not determine data directory, logging to {}",
                        config.log_file.display()
                    ));
                }
            }
        }

        (config, warnings)
    }

    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig::clamped(
            self.default_password_length,
            self.default_include_numbers,
            self.default_include_symbols,
        )
    }
}
