//! In-memory sink backing the web debug bar

use std::any::Any;
use std::io;

use crate::domain::LogRecord;
use crate::sink::Sink;

/// Collects records in memory for page-level display
#[derive(Debug, Default)]
pub struct WebSink {
    records: Vec<LogRecord>,
}

impl WebSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records collected so far, oldest first
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl Sink for WebSink {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
