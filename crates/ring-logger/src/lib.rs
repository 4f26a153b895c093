//! Ring Logger
//!
//! A `log` backend for browser apps. Each record goes to the console at the
//! matching level and the last `capacity` lines stay in memory so the app
//! can show or dump them later.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in the ring
pub const DEFAULT_CAPACITY: usize = 200;

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub at: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    pub fn render(&self) -> String {
        format!("{} {:<5} {} {}", self.at, self.level, self.target, self.message)
    }
}

pub struct RingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Install as the global logger. Can only succeed once per process.
    pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RingLogger, SetLoggerError> {
        let logger: &'static RingLogger = Box::leak(Box::new(Self::new(level, capacity)));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(logger)
    }

    /// Snapshot of retained lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    fn remember(&self, line: LogLine) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            at: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        sink::write(&line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogLine;
    use log::Level;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub fn write(line: &LogLine) {
        let text = JsValue::from_str(&line.render());
        match line.level {
            Level::Error => console::error_1(&text),
            Level::Warn => console::warn_1(&text),
            Level::Info => console::info_1(&text),
            Level::Debug | Level::Trace => console::debug_1(&text),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogLine;

    pub fn write(line: &LogLine) {
        eprintln!("{}", line.render());
    }
}
