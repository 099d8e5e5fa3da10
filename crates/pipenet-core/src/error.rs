//! Error types and exit codes for pipenet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph input, missing columns, unknown source)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid edges, weights, columns (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pipenet operations
#[derive(Error, Debug)]
pub enum PipenetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Invalid graph input (exit code 3)
    #[error("edge {edge_index}: node id {node} is outside [0, {node_count})")]
    NodeOutOfRange {
        edge_index: usize,
        node: usize,
        node_count: usize,
    },

    #[error("edge {edge_index}: weight {weight} must be finite and non-negative")]
    InvalidWeight { edge_index: usize, weight: f64 },

    #[error("source node {node} is outside [0, {node_count})")]
    InvalidSource { node: usize, node_count: usize },

    // Ingestion errors (exit code 3)
    #[error("input contains no edges")]
    EmptyInput,

    #[error("column not found: {column} (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("source node not found: {label}")]
    SourceNotFound { label: String },

    #[error("node not found: {label}")]
    NodeNotFound { label: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PipenetError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PipenetError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a row that cannot be interpreted
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        PipenetError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// True for the errors raised by the graph core when handed bad ids,
    /// bad weights, or a bad source node
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PipenetError::NodeOutOfRange { .. }
                | PipenetError::InvalidWeight { .. }
                | PipenetError::InvalidSource { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PipenetError::UnknownFormat(_)
            | PipenetError::UsageError(_)
            | PipenetError::InvalidValue { .. } => ExitCode::Usage,

            PipenetError::NodeOutOfRange { .. }
            | PipenetError::InvalidWeight { .. }
            | PipenetError::InvalidSource { .. }
            | PipenetError::EmptyInput
            | PipenetError::MissingColumn { .. }
            | PipenetError::MalformedRow { .. }
            | PipenetError::SourceNotFound { .. }
            | PipenetError::NodeNotFound { .. } => ExitCode::Data,

            PipenetError::Io(_)
            | PipenetError::Json(_)
            | PipenetError::Toml(_)
            | PipenetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PipenetError::UnknownFormat(_) => "unknown_format",
            PipenetError::UsageError(_) => "usage_error",
            PipenetError::InvalidValue { .. } => "invalid_value",
            PipenetError::NodeOutOfRange { .. } => "node_out_of_range",
            PipenetError::InvalidWeight { .. } => "invalid_weight",
            PipenetError::InvalidSource { .. } => "invalid_source",
            PipenetError::EmptyInput => "empty_input",
            PipenetError::MissingColumn { .. } => "missing_column",
            PipenetError::MalformedRow { .. } => "malformed_row",
            PipenetError::SourceNotFound { .. } => "source_not_found",
            PipenetError::NodeNotFound { .. } => "node_not_found",
            PipenetError::Io(_) => "io_error",
            PipenetError::Json(_) => "json_error",
            PipenetError::Toml(_) => "toml_error",
            PipenetError::Other(_) => "other",
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

/// Result type alias for pipenet operations
pub type Result<T> = std::result::Result<T, PipenetError>;
