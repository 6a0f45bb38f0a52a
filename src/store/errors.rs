//! Store error types
//!
//! Error codes:
//! - XRAY_STORE_OPEN_FAILED
//! - XRAY_STORE_WRITE_FAILED
//! - XRAY_STORE_TRUNCATE_FAILED
//!
//! Read-path failures have no code here: reads degrade to an empty result
//! instead of erroring.

use std::fmt;
use std::io;

/// Store-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// The log target could not be created or opened.
    OpenFailed,
    /// A record append did not complete.
    WriteFailed,
    /// The log could not be reset.
    TruncateFailed,
}

impl StoreErrorCode {
    /// Returns the string code.
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::OpenFailed => "XRAY_STORE_OPEN_FAILED",
            StoreErrorCode::WriteFailed => "XRAY_STORE_WRITE_FAILED",
            StoreErrorCode::TruncateFailed => "XRAY_STORE_TRUNCATE_FAILED",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with code and optional I/O source.
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    /// Create an open-failed error.
    pub fn open_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::OpenFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a write-failed error.
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::WriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a write-failed error with no I/O source (e.g. serialization).
    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::WriteFailed,
            message: message.into(),
            source: None,
        }
    }

    /// Create a truncate-failed error.
    pub fn truncate_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::TruncateFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
