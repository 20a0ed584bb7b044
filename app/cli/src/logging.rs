//! FILENAME: app/cli/src/logging.rs
// PURPOSE: Unified logging for the calculator host and the library crates.
// FORMAT: seq|level|category|message

use crate::error::CliError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter, one number per emitted line
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle
pub static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

static LOGGER: UnifiedLogger = UnifiedLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Single-letter level code used in the log line.
pub fn level_code(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

pub fn format_line(seq: u64, level: &str, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Create (or truncate) the log file and route log lines into it.
pub fn init_log_file(path: &Path) -> Result<(), CliError> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| CliError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|e| CliError::LogInit(format!("lock error: {}", e)))?;
    *log_file = Some(file);
    Ok(())
}

/// Write a log line in unified format.
/// Console copies go to stderr so stdout only ever carries results.
pub fn write_log(level: &str, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }

    eprintln!("{}", line);
}

/// Backend for the `log` facade, so records from the parser and engine
/// crates land in the same sink.
struct UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_log(
            level_code(record.level()),
            record.target(),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Install the logger at `level`, optionally mirroring into `log_file`.
/// The logger stays installed even when the file cannot be opened.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    log::set_logger(&LOGGER).map_err(|e| CliError::LogInit(e.to_string()))?;
    log::set_max_level(level);

    if let Some(path) = log_file {
        init_log_file(path)?;
    }
    Ok(())
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::log::debug!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::log::info!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::log::warn!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::log::error!(target: $cat, $($arg)*)
    };
}

// ENTER/EXIT macros for function tracing

#[macro_export]
macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        $crate::log::debug!(target: $cat, "ENTER {}", $func)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::log::debug!(target: $cat, "ENTER {} {}", $func, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        $crate::log::debug!(target: $cat, "EXIT {}", $func)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::log::debug!(target: $cat, "EXIT {} {}", $func, format_args!($($arg)*))
    };
}
