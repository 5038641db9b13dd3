//! Logger module
//!
//! Timestamped info, warning and error lines, written to stdout/stderr or
//! to the files named in the logging configuration.

pub mod writer;

use chrono::Local;

use crate::config::LoggingConfig;

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse a configured level name, falling back to `Info`
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Before that, every line
/// goes to stdout/stderr.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        Level::from_name(&config.level),
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn format_line(level: Level, message: &str) -> String {
    format!(
        "[{}] [{}] {message}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        level.label()
    )
}

fn write(level: Level, message: &str) {
    let line = format_line(level, message);
    match writer::get() {
        Some(w) => w.write(level, &line),
        None if level == Level::Info => println!("{line}"),
        None => eprintln!("{line}"),
    }
}

pub fn log_info(message: &str) {
    write(Level::Info, message);
}

pub fn log_warning(message: &str) {
    write(Level::Warn, message);
}

pub fn log_error(message: &str) {
    write(Level::Error, message);
}
