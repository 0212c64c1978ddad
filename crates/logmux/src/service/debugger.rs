//! Debugging facade: sink enablement, log calls, named timers

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Level, LogInfo, LogMessage, LogRecord, Severity};
use crate::error::DebugError;
use crate::service::{Dispatcher, Stopwatch, TimeEntry};
use crate::sink::{
    FileLogConfig, FileSink, OutputSink, QuerySink, Sink, SinkKind, TagSink, WebSink,
};

/// Startup settings for a [`Debugger`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Start with every log call suppressed
    pub logging_disabled: bool,
}

/// Application debugging facade
///
/// Owns the sink registry, the dispatcher and the timer registry. Every
/// method takes `&self`; the facade is meant to be shared across threads
/// behind an `Arc`.
///
/// Log calls are no-ops while logging is disabled or no sink is active.
/// Each sink kind can be enabled once; repeated enables keep the first
/// registration and its settings.
pub struct Debugger {
    dispatcher: RwLock<Dispatcher>,
    stopwatch: Stopwatch,
    runtime_info: AtomicBool,
    time_record: AtomicBool,
    logging_disabled: AtomicBool,
}

impl Default for Debugger {
    fn default() -> Self {
        Self::new()
    }
}

impl Debugger {
    pub fn new() -> Self {
        Self::with_config(DebugConfig::default())
    }

    pub fn with_config(config: DebugConfig) -> Self {
        Self {
            dispatcher: RwLock::new(Dispatcher::new()),
            stopwatch: Stopwatch::new(),
            runtime_info: AtomicBool::new(false),
            time_record: AtomicBool::new(false),
            logging_disabled: AtomicBool::new(config.logging_disabled),
        }
    }

    /// Suppress or re-allow all log calls without touching the sinks
    pub fn set_logging_disabled(&self, disabled: bool) {
        self.logging_disabled.store(disabled, Ordering::Relaxed);
    }

    /// Mark runtime environment reporting as wanted
    ///
    /// The facade only keeps the flag; whatever renders diagnostics pages
    /// checks [`Debugger::runtime_info_active`].
    pub fn enable_runtime_info(&self) {
        self.runtime_info.store(true, Ordering::Relaxed);
    }

    /// Activate in-memory logging for the web debug bar
    pub fn enable_web_log(&self) {
        self.register(SinkKind::Web, || Box::new(WebSink::new()));
    }

    /// Activate file logging
    pub fn enable_file_log(&self, config: FileLogConfig) {
        self.register(SinkKind::File, || Box::new(FileSink::new(config)));
    }

    /// Activate tag logging, one file per tag under `dir`
    pub fn enable_tag_log(&self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        self.register(SinkKind::Tag, || Box::new(TagSink::new(dir)));
    }

    /// Activate in-memory query collection
    pub fn enable_query_log(&self) {
        self.register(SinkKind::Query, || Box::new(QuerySink::new()));
    }

    /// Activate standard output logging
    pub fn enable_output_log(&self) {
        self.register(SinkKind::Output, || Box::new(OutputSink::new()));
    }

    /// Activate named timers
    pub fn enable_time_record(&self) {
        self.time_record.store(true, Ordering::Relaxed);
    }

    /// Attach a caller-provided sink to a slot
    ///
    /// Follows the same first-wins rule as the `enable_*` methods: if the
    /// slot is taken the sink is dropped.
    pub fn attach_sink(&self, kind: SinkKind, sink: Box<dyn Sink>) {
        self.register(kind, move || sink);
    }

    fn register(&self, kind: SinkKind, build: impl FnOnce() -> Box<dyn Sink>) {
        let mut dispatcher = self.dispatcher.write();
        if dispatcher.has_sink(kind) {
            debug!(kind = %kind, "sink already active, keeping the first registration");
            return;
        }
        dispatcher.add_sink(kind, build());
    }

    pub fn runtime_info_active(&self) -> bool {
        self.runtime_info.load(Ordering::Relaxed)
    }

    pub fn web_log_active(&self) -> bool {
        self.dispatcher.read().has_sink(SinkKind::Web)
    }

    pub fn file_log_active(&self) -> bool {
        self.dispatcher.read().has_sink(SinkKind::File)
    }

    pub fn tag_log_active(&self) -> bool {
        self.dispatcher.read().has_sink(SinkKind::Tag)
    }

    pub fn query_log_active(&self) -> bool {
        self.dispatcher.read().has_sink(SinkKind::Query)
    }

    pub fn output_log_active(&self) -> bool {
        self.dispatcher.read().has_sink(SinkKind::Output)
    }

    pub fn time_record_active(&self) -> bool {
        self.time_record.load(Ordering::Relaxed)
    }

    /// Kinds currently registered, in registration order
    pub fn active_sinks(&self) -> Vec<SinkKind> {
        self.dispatcher.read().kinds()
    }

    /// Log a message
    ///
    /// The level comes from `info` and defaults to [`Severity::Info`].
    /// A no-op while logging is disabled or no sink is active; otherwise
    /// the record is delivered to every active sink before returning.
    pub fn log(&self, message: impl Into<LogMessage>, info: LogInfo) -> Result<(), DebugError> {
        if self.logging_disabled.load(Ordering::Relaxed) {
            return Ok(());
        }
        let mut dispatcher = self.dispatcher.write();
        if dispatcher.is_empty() {
            return Ok(());
        }
        let level = info
            .level
            .clone()
            .unwrap_or(Level::Severity(Severity::Info));
        dispatcher.log(level, message.into(), &info)
    }

    /// Log at warn severity, overriding any level in `info`
    pub fn log_warning(
        &self,
        message: impl Into<LogMessage>,
        info: LogInfo,
    ) -> Result<(), DebugError> {
        self.log(message, info.with_level(Severity::Warn))
    }

    /// Log at err severity, overriding any level in `info`
    pub fn log_error(
        &self,
        message: impl Into<LogMessage>,
        info: LogInfo,
    ) -> Result<(), DebugError> {
        self.log(message, info.with_level(Severity::Err))
    }

    /// Log a tagged message, routed into a tag-named file by the tag sink
    pub fn log_tag(
        &self,
        message: impl Into<LogMessage>,
        tag: impl Into<String>,
        info: LogInfo,
    ) -> Result<(), DebugError> {
        self.log(message, info.with_tag(tag))
    }

    /// Start a named timer; a no-op until time recording is enabled
    pub fn time_start(&self, id: impl Into<String>) {
        if !self.time_record.load(Ordering::Relaxed) {
            return;
        }
        self.stopwatch.start(id);
    }

    /// Stop a named timer; a no-op until time recording is enabled
    pub fn time_stop(&self, id: &str) {
        if !self.time_record.load(Ordering::Relaxed) {
            return;
        }
        self.stopwatch.stop(id);
    }

    /// Snapshot of every timer, sorted by id
    pub fn times(&self) -> Vec<TimeEntry> {
        self.stopwatch.times()
    }

    /// Records collected by the web sink, `None` while it is inactive
    pub fn web_records(&self) -> Option<Vec<LogRecord>> {
        let dispatcher = self.dispatcher.read();
        let web = dispatcher
            .sink(SinkKind::Web)?
            .as_any()
            .downcast_ref::<WebSink>()?;
        Some(web.records().to_vec())
    }

    /// Records collected by the query sink, `None` while it is inactive
    pub fn query_records(&self) -> Option<Vec<LogRecord>> {
        let dispatcher = self.dispatcher.read();
        let query = dispatcher
            .sink(SinkKind::Query)?
            .as_any()
            .downcast_ref::<QuerySink>()?;
        Some(query.records().to_vec())
    }
}
