//! Domain types for the logging pipeline
//!
//! This module contains the value types a log call flows through:
//! - Severity scale and surface-level inputs (`Severity`, `Level`)
//! - Call payloads and the rendered record (`LogMessage`, `LogInfo`, `LogRecord`)
//! - Message template rendering (`template`)

mod record;
mod severity;
pub mod template;

pub use record::*;
pub use severity::*;
pub use template::RenderError;
