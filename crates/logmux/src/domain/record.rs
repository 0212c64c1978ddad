//! Log call payloads and the rendered record handed to sinks

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::severity::{Level, Severity};
use crate::error::DebugError;

/// Message payload accepted at the logging surface
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    Text(String),
    /// Structured payload, rendered as pretty-printed JSON
    Data(serde_json::Value),
}

impl LogMessage {
    /// Collapse to the text form used for rendering and storage
    pub fn into_text(self) -> Result<String, DebugError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Data(value) => {
                serde_json::to_string_pretty(&value).map_err(DebugError::MessageNotStringable)
            }
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<serde_json::Value> for LogMessage {
    fn from(value: serde_json::Value) -> Self {
        Self::Data(value)
    }
}

/// Call-site context attached to a log call
///
/// Everything is optional. The typed fields describe where the message came
/// from and end up on the [`LogRecord`]; `context` holds free-form template
/// variables for `{name}` placeholders in the message.
#[derive(Debug, Clone, Default)]
pub struct LogInfo {
    pub level: Option<Level>,
    pub tag: Option<String>,
    pub r#type: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
    pub class: Option<String>,
    pub context: BTreeMap<String, serde_json::Value>,
}

impl LogInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<Level>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.r#type = Some(kind.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Add a template variable
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Flatten into template variables; typed fields win over
    /// same-named context entries
    pub(crate) fn render_vars(&self) -> BTreeMap<String, String> {
        let mut vars: BTreeMap<String, String> = self
            .context
            .iter()
            .map(|(key, value)| (key.clone(), stringify(value)))
            .collect();
        if let Some(level) = &self.level {
            let name = match level {
                Level::Severity(severity) => severity.as_str().to_string(),
                Level::Named(name) => name.clone(),
            };
            vars.insert("level".to_string(), name);
        }
        if let Some(tag) = &self.tag {
            vars.insert("tag".to_string(), tag.clone());
        }
        if let Some(kind) = &self.r#type {
            vars.insert("type".to_string(), kind.clone());
        }
        if let Some(file) = &self.file {
            vars.insert("file".to_string(), file.clone());
        }
        if let Some(line) = self.line {
            vars.insert("line".to_string(), line.to_string());
        }
        if let Some(function) = &self.function {
            vars.insert("function".to_string(), function.clone());
        }
        if let Some(class) = &self.class {
            vars.insert("class".to_string(), class.clone());
        }
        vars
    }
}

fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Fully-rendered log entry handed to every sink
///
/// Serializes with short field names so display layers can ship
/// records as compact JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogRecord {
    /// Timestamp (ISO 8601)
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,

    /// Severity after normalization
    #[serde(rename = "lvl")]
    pub level: Severity,

    /// Rendered message
    #[serde(rename = "msg")]
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl LogRecord {
    /// Create a new record; call-site fields start empty
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            tag: None,
            r#type: None,
            file: None,
            line: None,
            function: None,
            class: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.r#type = Some(kind.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Compact call-site summary for text sinks, `None` when nothing is set
    pub fn origin(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(kind) = &self.r#type {
            parts.push(kind.clone());
        }
        match (&self.class, &self.function) {
            (Some(class), Some(function)) => parts.push(format!("{class}::{function}")),
            (Some(class), None) => parts.push(class.clone()),
            (None, Some(function)) => parts.push(function.clone()),
            (None, None) => {}
        }
        if let Some(file) = &self.file {
            match self.line {
                Some(line) => parts.push(format!("{file}:{line}")),
                None => parts.push(file.clone()),
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
