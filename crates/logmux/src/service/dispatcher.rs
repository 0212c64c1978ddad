//! Record construction and fan-out to registered sinks

use chrono::Utc;
use tracing::debug;

use crate::domain::{template, Level, LogInfo, LogMessage, LogRecord};
use crate::error::DebugError;
use crate::sink::{Sink, SinkKind};

struct RegisteredSink {
    kind: SinkKind,
    sink: Box<dyn Sink>,
}

/// Turns log calls into [`LogRecord`]s and hands them to every
/// registered sink in registration order
///
/// Dispatch is fail-fast: level normalization, message conversion and
/// template rendering happen before any sink is touched, and the first
/// sink error stops the call. Later sinks are not attempted.
#[derive(Default)]
pub struct Dispatcher {
    sinks: Vec<RegisteredSink>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink; registration order is delivery order
    pub fn add_sink(&mut self, kind: SinkKind, sink: Box<dyn Sink>) {
        debug!(kind = %kind, "sink registered");
        self.sinks.push(RegisteredSink { kind, sink });
    }

    pub fn has_sink(&self, kind: SinkKind) -> bool {
        self.sinks.iter().any(|registered| registered.kind == kind)
    }

    /// First registered sink of the given kind
    pub fn sink(&self, kind: SinkKind) -> Option<&dyn Sink> {
        self.sinks
            .iter()
            .find(|registered| registered.kind == kind)
            .map(|registered| registered.sink.as_ref())
    }

    /// Registered kinds in registration order
    pub fn kinds(&self) -> Vec<SinkKind> {
        self.sinks.iter().map(|registered| registered.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Build a record and deliver it to every sink
    pub fn log(
        &mut self,
        level: Level,
        message: LogMessage,
        info: &LogInfo,
    ) -> Result<(), DebugError> {
        let level = level.normalize()?;
        let text = message.into_text()?;
        let vars = info.render_vars();
        let message = if vars.is_empty() {
            text
        } else {
            template::render(&text, &vars)?
        };
        let record = LogRecord {
            timestamp: Utc::now(),
            level,
            message,
            tag: info.tag.clone(),
            r#type: info.r#type.clone(),
            file: info.file.clone(),
            line: info.line,
            function: info.function.clone(),
            class: info.class.clone(),
        };
        for registered in &mut self.sinks {
            registered
                .sink
                .write(&record)
                .map_err(|source| DebugError::Sink {
                    kind: registered.kind,
                    source,
                })?;
        }
        Ok(())
    }
}
