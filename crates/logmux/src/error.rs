//! Error types surfaced by log dispatch

use std::io;

use thiserror::Error;

use crate::domain::template::RenderError;
use crate::sink::SinkKind;

/// Why a log call failed
///
/// Gated no-op calls never produce one of these; errors only surface once a
/// record is actually being built and delivered.
#[derive(Debug, Error)]
pub enum DebugError {
    /// The level name is not part of the severity vocabulary
    #[error("unknown log level `{given}`")]
    InvalidLevel { given: String },

    /// A structured message could not be converted to text
    #[error("structured message cannot be rendered as text")]
    MessageNotStringable(#[source] serde_json::Error),

    /// The message template is malformed
    #[error("message template is malformed")]
    Render(#[from] RenderError),

    /// A sink failed while persisting the record
    #[error("{kind} sink write failed")]
    Sink {
        kind: SinkKind,
        #[source]
        source: io::Error,
    },
}
