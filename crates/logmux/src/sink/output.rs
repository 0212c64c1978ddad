//! Standard output sink

use std::any::Any;
use std::io::{self, Write};

use crate::domain::LogRecord;
use crate::sink::Sink;

/// Prints the bare message to standard output, one line per record
#[derive(Debug, Default)]
pub struct OutputSink;

impl OutputSink {
    pub fn new() -> Self {
        Self
    }

    fn write_to(writer: &mut impl Write, record: &LogRecord) -> io::Result<()> {
        writeln!(writer, "{}", record.message)
    }
}

impl Sink for OutputSink {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        Self::write_to(&mut io::stdout().lock(), record)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
