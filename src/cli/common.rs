//! Shared CLI error and exit-code handling.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Category of a CLI failure, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Input was well-formed but failed domain validation (e.g. a band
    /// sequence that does not decode).
    ValidationFailed = 1,
    /// Arguments could not be understood (e.g. an unknown color name).
    UsageError = 2,
    /// Reading or writing files failed.
    IoError = 3,
}

/// Error raised by CLI command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    code: ExitCode,
    message: String,
}

impl CliError {
    /// A domain validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// A bad-arguments failure (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::UsageError,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 3).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// The process exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
