//! Logging backend for the ppx-shortcuts binary
//!
//! Routes the `log` facade to stderr as
//! `[timestamp] [LEVEL] [target] message`.
//!
//! Level precedence: `--log-level` flag, then the DEBUG_LEVEL environment
//! variable, then warnings only. DEBUG_LEVEL values:
//! - 0: No logging
//! - 1: Errors only
//! - 2: Info level (settings load/save, registry construction)
//! - 3: Debug level (matches, rejected captures)
//! - 4: Trace level

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log verbosity selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Parse a DEBUG_LEVEL value.
    pub fn from_debug_level(value: &str) -> Option<Self> {
        match value.trim().parse::<u8>() {
            Ok(0) => Some(LogLevel::Off),
            Ok(1) => Some(LogLevel::Error),
            Ok(2) => Some(LogLevel::Info),
            Ok(3) => Some(LogLevel::Debug),
            Ok(4) => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn from_env() -> Option<Self> {
        std::env::var("DEBUG_LEVEL")
            .ok()
            .and_then(|value| Self::from_debug_level(&value))
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// `log::Log` implementation writing one line per record.
struct DebugLogger {
    level: log::LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for DebugLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let mut sink = self.sink.lock();
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

fn format_line(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    let level_str = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    format!("[{timestamp}] [{level_str}] [{target}] {msg}\n")
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Resolve the effective level from the CLI flag and environment.
pub fn resolve_level(cli_level: Option<LogLevel>) -> LogLevel {
    cli_level.or_else(LogLevel::from_env).unwrap_or_default()
}

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

/// Install the stderr logger. Later calls keep the first logger and level.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let logger = LOGGER.get_or_init(|| DebugLogger {
        level: resolve_level(cli_level).to_level_filter(),
        sink: Mutex::new(Box::new(io::stderr())),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_level_values() {
        assert_eq!(LogLevel::from_debug_level("0"), Some(LogLevel::Off));
        assert_eq!(LogLevel::from_debug_level(" 3 "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_debug_level("9"), None);
        assert_eq!(LogLevel::from_debug_level("verbose"), None);
    }

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(resolve_level(Some(LogLevel::Trace)), LogLevel::Trace);
    }

    #[test]
    fn test_init_keeps_first_logger() {
        init_log_bridge(Some(LogLevel::Debug));
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        assert!(log::log_enabled!(log::Level::Debug));

        init_log_bridge(Some(LogLevel::Error));
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            format_line("12.000001", log::Level::Warn, "ppx_shortcuts_config::settings", "skipped"),
            "[12.000001] [WARN ] [ppx_shortcuts_config::settings] skipped\n"
        );
    }
}
