//! In-memory sink for database query inspection

use std::any::Any;
use std::io;

use crate::domain::LogRecord;
use crate::sink::Sink;

/// Collects records in memory so a toolbar or test can inspect the
/// queries a request issued
#[derive(Debug, Default)]
pub struct QuerySink {
    records: Vec<LogRecord>,
}

impl QuerySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records collected so far, oldest first
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl Sink for QuerySink {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
