//! Rolling Logger
//!
//! File logger for the desktop shell. Formatted lines go to
//! `<dir>/<app_name>.log`, which rotates to `<app_name>.log.1` once it grows
//! past a size cap. The most recent lines are also kept in memory so they
//! can be shown or attached to a bug report without touching the disk.
//!
//! `log` records are bridged into `tracing`, so backend code can keep using
//! the `log` macros.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Rotate once the active file would exceed this many bytes
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of recent lines kept in memory
pub const DEFAULT_BUFFER_LINES: usize = 500;

static WRITER: OnceLock<RollingWriter> = OnceLock::new();

/// Logger errors
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    Init(String),
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::Init(msg) => write!(f, "Logger init failed: {}", msg),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

struct Inner {
    path: PathBuf,
    rotated_path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    lines: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl Inner {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.rotated_path.exists() {
            fs::remove_file(&self.rotated_path)?;
        }
        fs::rename(&self.path, &self.rotated_path)?;
        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        let len = buf.len() as u64;
        if self.written > 0 && self.written + len > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += len;
        self.remember(buf);
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.capacity == 0 {
            return;
        }
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(line.trim_end_matches(['\r', '\n']).to_string());
        }
    }
}

/// Size-capped log file plus a ring buffer of recent lines
///
/// Cheap to clone; all clones share the same file and buffer.
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

impl RollingWriter {
    /// Open `<dir>/<app_name>.log` with the default limits
    pub fn new(dir: impl AsRef<Path>, app_name: &str) -> Result<Self, LoggerError> {
        Self::with_limits(dir, app_name, DEFAULT_MAX_FILE_BYTES, DEFAULT_BUFFER_LINES)
    }

    pub fn with_limits(
        dir: impl AsRef<Path>,
        app_name: &str,
        max_bytes: u64,
        capacity: usize,
    ) -> Result<Self, LoggerError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(format!("{}.log", app_name));
        let rotated_path = dir.join(format!("{}.log.1", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                path,
                rotated_path,
                file,
                written,
                max_bytes,
                lines: VecDeque::with_capacity(capacity),
                capacity,
                partial: String::new(),
            })),
        })
    }

    /// Path of the active log file
    pub fn log_path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().lines.iter().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic mid-write leaves the buffer usable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps, millisecond precision
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber, writing to `log_dir` and stderr
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<PathBuf, LoggerError> {
    let writer = RollingWriter::new(log_dir, app_name)?;
    let path = writer.log_path();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_writer(writer.clone());
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    WRITER
        .set(writer)
        .map_err(|_| LoggerError::Init("logger already initialized".to_string()))?;

    log::info!("{} logging to {}", app_name, path.display());
    Ok(path)
}

/// Recent lines from the global logger
pub fn recent_lines() -> Result<Vec<String>, LoggerError> {
    WRITER
        .get()
        .map(RollingWriter::recent_lines)
        .ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    WRITER.get().ok_or(LoggerError::NotInitialized)?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    WRITER.get().ok_or(LoggerError::NotInitialized)?;
    tracing::error!("{}", msg);
    Ok(())
}
