//! Structured JSON diagnostics logger
//!
//! - One log line = one event
//! - `event` key first, then `severity`, then fields sorted by key
//! - Synchronous, unbuffered writes
//! - ERROR and FATAL go to stderr, everything else to stdout
//!
//! Diagnostic output must never fail the code being observed, so write
//! errors are swallowed.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues (e.g. a skipped record)
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the severity string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostics sink for the trace-capture core.
pub struct Diag;

impl Diag {
    /// Emit an event at the given severity.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, String)]) {
        if severity >= Severity::Error {
            Self::emit(severity, event, fields, &mut io::stderr());
        } else {
            Self::emit(severity, event, fields, &mut io::stdout());
        }
    }

    /// Emit one JSON line to the given writer.
    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, String)], writer: &mut W) {
        let mut object = Map::new();
        object.insert("event".to_string(), Value::String(event.to_string()));
        object.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );

        // serde_json's Map preserves insertion order, so sorting the fields
        // before insertion makes the output deterministic.
        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted {
            object.insert((*key).to_string(), Value::String(value.clone()));
        }

        let mut line = Value::Object(object).to_string();
        line.push('\n');

        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Emit at INFO.
    pub fn info(event: &str, fields: &[(&str, String)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Emit at WARN.
    pub fn warn(event: &str, fields: &[(&str, String)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Emit at ERROR.
    pub fn error(event: &str, fields: &[(&str, String)]) {
        Self::log(Severity::Error, event, fields);
    }
}

#[cfg(test)]
fn capture(severity: Severity, event: &str, fields: &[(&str, String)]) -> String {
    let mut buffer = Vec::new();
    Diag::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
