//! Error types.
//!
//! - `EngineError`: configuration errors raised by the engine (synthesis,
//!   expansion, comparison). These go back to the immediate caller unchanged.
//! - `AppError`: binary-level error carrying a process exit code.

use thiserror::Error;

/// Malformed or internally inconsistent configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("year range is empty: last year {last} is before first year {first}")]
    EmptyYearRange { first: i32, last: i32 },

    #[error("years must increase by exactly 1 (found {previous} followed by {next})")]
    NonContiguousYears { previous: i32, next: i32 },

    #[error("indicator '{indicator}' has a growth rate but no base value")]
    MissingBase { indicator: String },

    #[error("indicator '{indicator}': invalid {parameter} ({value})")]
    InvalidParameter {
        indicator: String,
        parameter: &'static str,
        value: f64,
    },

    #[error("indicator '{indicator}' evaluates to a negative value ({value}) in {year}")]
    NegativeValue {
        indicator: String,
        year: i32,
        value: f64,
    },

    #[error("series '{indicator}' does not cover the table years {first}..={last}")]
    MisalignedSeries {
        indicator: String,
        first: i32,
        last: i32,
    },

    #[error("indicator '{indicator}' is already present in the table")]
    DuplicateIndicator { indicator: String },

    #[error("indicator '{indicator}' is missing from the snapshot of '{entity}'")]
    MissingIndicator { entity: String, indicator: String },

    #[error("snapshot of '{entity}' has an invalid value for '{indicator}' ({value})")]
    InvalidSnapshotValue {
        entity: String,
        indicator: String,
        value: f64,
    },

    #[error("window {first}..={last} is outside the table years {table_first}..={table_last}")]
    WindowOutOfRange {
        first: i32,
        last: i32,
        table_first: i32,
        table_last: i32,
    },

    #[error("projection horizon must start after {table_last} (starts at {first})")]
    HorizonNotAfterTable { first: i32, table_last: i32 },

    #[error("indicator '{indicator}' is not in the table")]
    UnknownIndicator { indicator: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError::new(2, format!("Configuration error: {err}"))
    }
}
