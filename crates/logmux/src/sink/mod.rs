//! Log sinks
//!
//! A sink accepts fully-rendered records and persists or displays them.
//! Each one occupies a [`SinkKind`] slot in the dispatcher registry and
//! receives every dispatched record in registration order.

mod file;
mod output;
mod query;
mod tag;
mod web;

use std::any::Any;
use std::fmt::{self, Write as _};
use std::io;

use serde::{Deserialize, Serialize};

use crate::domain::LogRecord;

pub use file::{FileLogConfig, FileSink};
pub use output::OutputSink;
pub use query::QuerySink;
pub use tag::TagSink;
pub use web::WebSink;

/// Destination for rendered log records
pub trait Sink: Send + Sync {
    /// Persist or display one record
    fn write(&mut self, record: &LogRecord) -> io::Result<()>;

    /// Downcast support for sink-specific accessors
    fn as_any(&self) -> &dyn Any;
}

/// Registry slot a sink occupies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Web,
    File,
    Tag,
    Query,
    Output,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::File => "file",
            Self::Tag => "tag",
            Self::Query => "query",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp layout used by text sinks unless configured otherwise
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One text line per record: timestamp, severity label, message, call site
///
/// Fails when `date_format` is not a valid strftime pattern.
pub(crate) fn format_line(record: &LogRecord, date_format: &str) -> io::Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", record.timestamp.format(date_format)).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid date format `{date_format}`"),
        )
    })?;
    let mut line = format!("[{stamp}] [{}] {}", record.level.label(), record.message);
    if let Some(origin) = record.origin() {
        line.push_str(" (");
        line.push_str(&origin);
        line.push(')');
    }
    Ok(line)
}
