//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::fmt;

/// CLI error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// The trace store could not be opened.
    BootFailed,
    /// The tokio runtime could not be created or the server failed.
    RuntimeError,
    /// The demo pipeline failed.
    DemoFailed,
}

impl CliErrorCode {
    /// Get the error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BootFailed => "XRAY_CLI_BOOT_FAILED",
            Self::RuntimeError => "XRAY_CLI_RUNTIME_ERROR",
            Self::DemoFailed => "XRAY_CLI_DEMO_FAILED",
        }
    }
}

/// CLI error.
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Store could not be opened.
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Runtime or server failure.
    pub fn runtime_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RuntimeError, msg)
    }

    /// Demo pipeline failure.
    pub fn demo_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DemoFailed, msg)
    }

    /// Returns the error code.
    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliErrorCode::BootFailed.code(), "XRAY_CLI_BOOT_FAILED");
        assert_eq!(CliErrorCode::RuntimeError.code(), "XRAY_CLI_RUNTIME_ERROR");
        assert_eq!(CliErrorCode::DemoFailed.code(), "XRAY_CLI_DEMO_FAILED");
    }

    #[test]
    fn test_display_contains_code() {
        let err = CliError::boot_failed("cannot open trace log");
        let display = err.to_string();
        assert!(display.contains("XRAY_CLI_BOOT_FAILED"));
        assert!(display.contains("cannot open trace log"));
    }
}
