//! Mock sinks for dispatch tests.

use std::any::Any;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use logmux::{LogRecord, Sink};

/// Shared record store a [`CapturingSink`] writes into
pub type SharedRecords = Arc<Mutex<Vec<LogRecord>>>;

/// Delivery journal shared between sinks to observe fan-out order
pub type SharedJournal = Arc<Mutex<Vec<String>>>;

/// Sink that stores every record and notes its label in a shared journal
pub struct CapturingSink {
    pub label: &'static str,
    pub journal: SharedJournal,
    pub records: SharedRecords,
}

impl CapturingSink {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            journal: SharedJournal::default(),
            records: SharedRecords::default(),
        }
    }

    /// Share a journal with other sinks so delivery order is observable
    pub fn with_journal(mut self, journal: SharedJournal) -> Self {
        self.journal = journal;
        self
    }
}

impl Sink for CapturingSink {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        debug!(sink = self.label, record = %record.message, "record captured");
        self.journal.lock().push(self.label.to_string());
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Sink whose writes always fail with an I/O error
pub struct FailingSink;

impl Sink for FailingSink {
    fn write(&mut self, _record: &LogRecord) -> io::Result<()> {
        Err(io::Error::other("sink exploded"))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
