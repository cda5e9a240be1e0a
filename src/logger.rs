// Session logging: one timestamped file per run, oldest files rotated out.
// Buffered until finalize unless streaming, in which case every line is
// echoed to stderr and appended immediately.
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

pub struct SessionLogger {
    buffer: Mutex<Vec<String>>,
    log_path: PathBuf,
    log_dir: PathBuf,
    retention_count: usize,
    app_name: String,
    streaming: bool,
    finalized: AtomicBool,
}

impl SessionLogger {
    pub fn new(log_dir: PathBuf, app_name: &str, retention_count: usize, streaming: bool) -> Result<Self> {
        fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("{}_{}.log", app_name, timestamp));

        let logger = Self {
            buffer: Mutex::new(Vec::new()),
            log_path,
            log_dir,
            retention_count,
            app_name: app_name.to_string(),
            streaming,
            finalized: AtomicBool::new(false),
        };

        logger.rotate()?;
        logger.write(LogLevel::Info, format!("=== {} session started ===", app_name));

        Ok(logger)
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn write(&self, level: LogLevel, message: impl AsRef<str>) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = format!("[{}] {:<5} {}", timestamp, level, message.as_ref());

        if self.streaming {
            eprintln!("{}", line);
            let _ = self.append(std::slice::from_ref(&line));
        } else if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.write(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.write(LogLevel::Error, message);
    }

    fn append(&self, lines: &[String]) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file {}", self.log_path.display()))?;

        for line in lines {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        Ok(())
    }

    /// Keep only the newest `retention_count` logs of this app, counting the
    /// session about to be written.
    fn rotate(&self) -> Result<()> {
        let prefix = format!("{}_", self.app_name);
        let mut logs: Vec<(PathBuf, std::time::SystemTime)> = fs::read_dir(&self.log_dir)?
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                let name = path.file_name()?.to_str()?;
                if !name.starts_with(&prefix) || path.extension()? != "log" {
                    return None;
                }
                let modified = entry.metadata().ok()?.modified().ok()?;
                Some((path, modified))
            })
            .collect();

        logs.sort_by(|a, b| b.1.cmp(&a.1));

        for (path, _) in logs.iter().skip(self.retention_count.saturating_sub(1)) {
            let _ = fs::remove_file(path);
        }

        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.is_empty() {
                return Ok(());
            }
            self.append(&buffer)?;
            buffer.clear();
        }
        Ok(())
    }

    /// Write the closing line and flush. Only the first call does anything.
    pub fn finalize(&self) -> Result<()> {
        if self.finalized.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.write(LogLevel::Info, format!("=== {} session ended ===", self.app_name));
        self.flush()
    }
}

impl Drop for SessionLogger {
    fn drop(&mut self) {
        let _ = self.finalize();
    }
}

static LOGGER: once_cell::sync::OnceCell<SessionLogger> = once_cell::sync::OnceCell::new();

pub fn init_logger(log_dir: PathBuf, app_name: &str, retention_count: usize, streaming: bool) -> Result<()> {
    let logger = SessionLogger::new(log_dir, app_name, retention_count, streaming)?;
    LOGGER
        .set(logger)
        .map_err(|_| anyhow::anyhow!("Logger already initialized"))?;
    Ok(())
}

/// No-op until [`init_logger`] has run
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    if let Some(logger) = LOGGER.get() {
        logger.write(level, message);
    }
}

pub fn finalize_logs() -> Result<()> {
    if let Some(logger) = LOGGER.get() {
        logger.finalize()?;
    }
    Ok(())
}

pub fn get_log_path() -> Option<PathBuf> {
    LOGGER.get().map(|logger| logger.log_path.clone())
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rgb_hsi_logger_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_buffered_logger_writes_on_finalize() {
        let dir = scratch_dir("buffered");
        let logger = SessionLogger::new(dir.clone(), "test", 10, false).unwrap();
        logger.warn("careful");

        assert!(!logger.log_path().exists());
        logger.finalize().unwrap();

        let content = fs::read_to_string(logger.log_path()).unwrap();
        assert!(content.contains("session started"));
        assert!(content.contains("WARN  careful"));
        assert!(content.contains("session ended"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_dropped_logger_flushes_buffer() {
        let dir = scratch_dir("dropped");
        let logger = SessionLogger::new(dir.clone(), "test", 10, false).unwrap();
        logger.warn("left in buffer");
        let path = logger.log_path().to_path_buf();
        drop(logger);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN  left in buffer"));
        assert_eq!(content.matches("session ended").count(), 1);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_finalize_then_drop_ends_session_once() {
        let dir = scratch_dir("finalize_drop");
        let logger = SessionLogger::new(dir.clone(), "test", 10, false).unwrap();
        logger.finalize().unwrap();
        logger.finalize().unwrap();
        let path = logger.log_path().to_path_buf();
        drop(logger);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("session ended").count(), 1);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_streaming_logger_appends_immediately() {
        let dir = scratch_dir("streaming");
        let logger = SessionLogger::new(dir.clone(), "test", 10, true).unwrap();
        logger.error("boom");

        let content = fs::read_to_string(logger.log_path()).unwrap();
        assert!(content.contains("ERROR boom"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_rotation_keeps_newest_logs() {
        let dir = scratch_dir("rotation");
        fs::create_dir_all(&dir).unwrap();
        for n in 0..5 {
            fs::write(dir.join(format!("app_2020010{}_000000.log", n)), "old").unwrap();
        }
        fs::write(dir.join("other_20200101_000000.log"), "keep").unwrap();

        let logger = SessionLogger::new(dir.clone(), "app", 3, false).unwrap();
        logger.finalize().unwrap();

        let app_logs = fs::read_dir(&dir)
            .unwrap()
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().starts_with("app_"))
            .count();
        assert_eq!(app_logs, 3);
        assert!(dir.join("other_20200101_000000.log").exists());

        let _ = fs::remove_dir_all(dir);
    }
}
