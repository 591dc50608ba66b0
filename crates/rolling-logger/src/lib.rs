//! Rolling Logger
//!
//! A `tracing` subscriber that writes to a bounded set of log files.
//! The active file is `<app>.log`; when it grows past [`MAX_FILE_BYTES`]
//! it becomes `<app>.1.log`, the previous `.1` becomes `.2`, and so on.
//! At most [`MAX_FILES`] files are kept, the oldest one is dropped.
//!
//! `log` records are bridged into the same subscriber, so callers can use
//! either `log::info!` or the [`info`] / [`warn`] / [`error`] helpers.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Size at which the active file is rotated
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;

/// Number of files kept, including the active one
pub const MAX_FILES: usize = 5;

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Install the global logger at `Info` level
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with_level(log_dir, app_name, log::LevelFilter::Info)
}

/// Install the global logger with an explicit level
pub fn init_logger_with_level(
    log_dir: PathBuf,
    app_name: &str,
    level: log::LevelFilter,
) -> Result<(), LoggerError> {
    if LOG_DIR.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let writer = RollingWriter::open(&log_dir, app_name, MAX_FILE_BYTES, MAX_FILES)?;

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(to_tracing_level(level))
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOG_DIR
        .set(log_dir)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Directory the logger writes to, once initialized
pub fn log_dir() -> Option<&'static Path> {
    LOG_DIR.get().map(PathBuf::as_path)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    match LOG_DIR.get() {
        Some(_) => Ok(()),
        None => Err(LoggerError::NotInitialized),
    }
}

fn to_tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn slot_path(dir: &Path, stem: &str, slot: usize) -> PathBuf {
    if slot == 0 {
        dir.join(format!("{}.log", stem))
    } else {
        dir.join(format!("{}.{}.log", stem, slot))
    }
}

struct RollingFile {
    dir: PathBuf,
    stem: String,
    max_bytes: u64,
    max_files: usize,
    file: Option<File>,
    written: u64,
}

impl RollingFile {
    fn open(dir: &Path, stem: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(slot_path(dir, stem, 0))?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
            max_bytes,
            max_files: max_files.max(1),
            file: Some(file),
            written,
        })
    }

    fn rotate(&mut self) -> io::Result<()> {
        // Close the active file first; renaming an open file fails on Windows.
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }

        let oldest = slot_path(&self.dir, &self.stem, self.max_files - 1);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for slot in (0..self.max_files - 1).rev() {
            let from = slot_path(&self.dir, &self.stem, slot);
            if from.exists() {
                fs::rename(&from, slot_path(&self.dir, &self.stem, slot + 1))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(slot_path(&self.dir, &self.stem, 0))?;
        self.file = Some(file);
        self.written = 0;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.file.is_none()
            || (self.written > 0 && self.written + buf.len() as u64 > self.max_bytes)
        {
            self.rotate()?;
        }
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file not open"))?;
        let n = file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Shared handle handed to the fmt layer for every event
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl RollingWriter {
    pub fn open(dir: &Path, stem: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let file = RollingFile::open(dir, stem, max_bytes, max_files)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(file)),
        })
    }

    fn with_file<R>(&self, f: impl FnOnce(&mut RollingFile) -> io::Result<R>) -> io::Result<R> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        f(&mut *guard)
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(RollingFile::flush)
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_to_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::open(dir.path(), "app", 1024, 3).unwrap();

        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, "hello\n");
    }

    #[test]
    fn test_rotates_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::open(dir.path(), "app", 10, 3).unwrap();

        writer.write_all(b"first-line").unwrap();
        writer.write_all(b"second").unwrap();
        writer.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.1.log", "app.log"]);
        assert_eq!(fs::read_to_string(dir.path().join("app.1.log")).unwrap(), "first-line");
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "second");
    }

    #[test]
    fn test_drops_oldest_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::open(dir.path(), "app", 4, 3).unwrap();

        for chunk in [b"aaaa", b"bbbb", b"cccc", b"dddd"] {
            writer.write_all(chunk).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.1.log", "app.2.log", "app.log"]);
        assert_eq!(fs::read_to_string(dir.path().join("app.2.log")).unwrap(), "bbbb");
        assert_eq!(fs::read_to_string(dir.path().join("app.1.log")).unwrap(), "cccc");
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "dddd");
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut writer = RollingWriter::open(dir.path(), "app", 1024, 3).unwrap();
            writer.write_all(b"one\n").unwrap();
        }
        let mut writer = RollingWriter::open(dir.path(), "app", 1024, 3).unwrap();
        writer.write_all(b"two\n").unwrap();
        writer.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_helpers_require_init() {
        assert!(matches!(info("not yet"), Err(LoggerError::NotInitialized)));
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(to_tracing_level(log::LevelFilter::Warn), LevelFilter::WARN);
        assert_eq!(to_tracing_level(log::LevelFilter::Off), LevelFilter::OFF);
    }
}
