//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and echoes every record to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records retained
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular-buffer logger
pub struct RollingLogger {
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingLogger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Store a line, evicting the oldest once full
    pub fn push(&self, line: LogLine) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of retained lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        Level::Info => web_sys::console::info_1(&text),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line);
}

/// Install the global logger. Calling twice returns the `log` error.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines retained by the global logger (empty before `init`)
pub fn recent() -> Vec<LogLine> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}
