//! Append-only file sink with time-based retention

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::LogRecord;
use crate::sink::{format_line, Sink, DEFAULT_DATE_FORMAT};

/// File sink settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLogConfig {
    /// Log file path
    pub path: PathBuf,

    /// A file whose last write is older than this many days is
    /// truncated instead of appended to
    pub ttl_days: u32,

    /// Timestamp layout for log lines (strftime syntax)
    pub date_format: String,
}

impl FileLogConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl_days: 90,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_ttl_days(mut self, ttl_days: u32) -> Self {
        self.ttl_days = ttl_days;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }
}

/// Appends one formatted line per record to a single log file
///
/// The file is opened lazily on the first write, so enabling the sink
/// never touches the filesystem by itself. Missing parent directories
/// are created at that point.
pub struct FileSink {
    config: FileLogConfig,
    file: Option<File>,
}

impl FileSink {
    pub fn new(config: FileLogConfig) -> Self {
        Self { config, file: None }
    }

    pub fn config(&self) -> &FileLogConfig {
        &self.config
    }

    fn open(&self) -> io::Result<File> {
        let path = &self.config.path;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let expired = match fs::metadata(path) {
            Ok(metadata) => {
                let modified: DateTime<Utc> = metadata.modified()?.into();
                Utc::now() - modified > Duration::days(i64::from(self.config.ttl_days))
            }
            Err(_) => false,
        };
        if expired {
            debug!(path = %path.display(), "log file past its ttl, starting fresh");
            return File::create(path);
        }
        OpenOptions::new().create(true).append(true).open(path)
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        let line = format_line(record, &self.config.date_format)?;
        if self.file.is_none() {
            self.file = Some(self.open()?);
        }
        if let Some(file) = &mut self.file {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
