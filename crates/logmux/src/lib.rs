//! # Logmux
//!
//! Application-level logging facade with multi-sink fan-out and named
//! timers. A [`Debugger`] owns a registry of sinks (web, file, tag, query,
//! standard output); every log call is rendered once and delivered to all
//! active sinks synchronously, in registration order.
//!
//! ## Modules
//!
//! - `domain` - Severity scale, call payloads, record and template rendering
//! - `sink` - Sink trait and the shipped sink implementations
//! - `service` - The facade, the dispatcher and the stopwatch
//! - `error` - Error types surfaced by dispatch
//!
//! ## Example
//!
//! ```
//! use logmux::{Debugger, LogInfo, Severity};
//!
//! let debugger = Debugger::new();
//! debugger.enable_web_log();
//!
//! debugger.log("cache warmed in {elapsed}ms", LogInfo::new().with("elapsed", 12))?;
//! debugger.log_warning("pool nearly exhausted", LogInfo::new())?;
//!
//! let records = debugger.web_records().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].message, "cache warmed in 12ms");
//! assert_eq!(records[1].level, Severity::Warn);
//! # Ok::<(), logmux::DebugError>(())
//! ```

pub mod domain;
pub mod error;
pub mod service;
pub mod sink;

// Re-export commonly used types
pub use domain::*;
pub use error::DebugError;
pub use service::*;
pub use sink::{
    FileLogConfig, FileSink, OutputSink, QuerySink, Sink, SinkKind, TagSink, WebSink,
    DEFAULT_DATE_FORMAT,
};
