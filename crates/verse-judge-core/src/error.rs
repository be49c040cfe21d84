//! Error types and exit codes for verse-judge
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O on output or checkpoints, serialization)
//! - 2: Usage error (bad flags, invalid configuration, missing credentials)
//! - 3: Data error (missing or malformed input)
//!
//! Per-item scoring failures never reach this type; they are contained by the
//! scoring client and show up as absent scores.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the verse-judge binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or configuration (2)
    Usage = 2,
    /// Data error - missing or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Fatal errors that abort an evaluation run
#[derive(Error, Debug)]
pub enum EvalError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unknown rubric: {name} (supported: {supported})")]
    UnknownRubric { name: String, supported: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid input record in {path:?} at line {line}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl EvalError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        EvalError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        EvalError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        EvalError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EvalError::UsageError(_)
            | EvalError::UnknownRubric { .. }
            | EvalError::InvalidValue { .. }
            | EvalError::MissingCredentials(_) => ExitCode::Usage,

            EvalError::NotFound { .. } | EvalError::InvalidRecord { .. } => ExitCode::Data,

            EvalError::Json(_)
            | EvalError::Toml(_)
            | EvalError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            EvalError::UsageError(_) => "usage_error",
            EvalError::UnknownRubric { .. } => "unknown_rubric",
            EvalError::InvalidValue { .. } => "invalid_value",
            EvalError::MissingCredentials(_) => "missing_credentials",
            EvalError::NotFound { .. } => "not_found",
            EvalError::InvalidRecord { .. } => "invalid_record",
            EvalError::Json(_) => "json_error",
            EvalError::Toml(_) => "toml_error",
            EvalError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for verse-judge operations
pub type Result<T> = std::result::Result<T, EvalError>;
