//! Structured logging setup for the presetwire binary.
//!
//! Plain text goes through `env_logger`; setting
//! `PRESETWIRE_LOG_LEVEL=json` (or `json:<level>`) switches to one JSON
//! object per line on stderr, optionally redirected to the file named by
//! `PRESETWIRE_LOG_PATH`.

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// JSON line logger
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<std::fs::File>>,
}

impl JsonLogger {
    fn new(level: Level, log_path: Option<String>) -> Self {
        let target_file = log_path
            .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize logging from a level string, e.g. "debug" or "json:debug"
    pub fn init_with_level(level_str: &str) {
        let (use_json, actual_level) = if let Some(stripped) = level_str.strip_prefix("json:") {
            (true, stripped)
        } else if level_str == "json" {
            (true, "info")
        } else {
            (false, level_str)
        };

        if !use_json {
            let filter = match actual_level {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                "off" => LevelFilter::Off,
                _ => LevelFilter::Info,
            };
            env_logger::Builder::new().filter_level(filter).init();
            return;
        }

        let level = match actual_level {
            "trace" => Level::Trace,
            "debug" => Level::Debug,
            "warn" => Level::Warn,
            "error" => Level::Error,
            _ => Level::Info,
        };

        let log_path = env::var("PRESETWIRE_LOG_PATH").ok();
        let logger = Box::new(JsonLogger::new(level, log_path));

        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return;
        }
        log::set_max_level(level.to_level_filter());
    }

    /// Initialize with the level taken from `PRESETWIRE_LOG_LEVEL`
    pub fn init() {
        let level = env::var("PRESETWIRE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        Self::init_with_level(&level);
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
        });

        let line = format!("{}\n", entry);

        if let Ok(mut guard) = self.target_file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
                return;
            }
        }
        let _ = io::stderr().write_all(line.as_bytes());
        let _ = io::stderr().flush();
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.target_file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}
