//! Tag-partitioned file sink

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::LogRecord;
use crate::sink::{format_line, Sink, DEFAULT_DATE_FORMAT};

/// Routes tagged records into one file per tag, `<dir>/<tag>.log`
///
/// Records without a tag are skipped. Open files are kept around so
/// repeated writes to the same tag reuse the handle.
pub struct TagSink {
    dir: PathBuf,
    files: HashMap<String, File>,
}

impl TagSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Tag names become file names; anything unsafe for a path is replaced
    fn sanitize_tag(tag: &str) -> String {
        tag.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn file_for(&mut self, tag: &str) -> io::Result<&mut File> {
        match self.files.entry(Self::sanitize_tag(tag)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                fs::create_dir_all(&self.dir)?;
                let path = self.dir.join(format!("{}.log", entry.key()));
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(entry.insert(file))
            }
        }
    }
}

impl Sink for TagSink {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        let Some(tag) = record.tag.as_deref() else {
            return Ok(());
        };
        let line = format_line(record, DEFAULT_DATE_FORMAT)?;
        let file = self.file_for(tag)?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
