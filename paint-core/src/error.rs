//! Error types for paint calculation input handling.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for input processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Numeric field rejected at the input boundary (E100)
    InvalidNumber = 100,
    /// Malformed opening size (E101)
    InvalidOpeningSpec = 101,
    /// Negative measurement in a job file (E102)
    NegativeValue = 102,
    /// Malformed job file (E200)
    InvalidJob = 200,
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid value for '{field}': expected digits with an optional decimal point, got '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid opening size '{value}': expected <width>x<height> in feet")]
    InvalidOpeningSpec { value: String },

    #[error("Invalid value for '{field}': must not be negative, got {value}")]
    NegativeValue { field: String, value: f64 },

    #[error("Invalid job file: {message}")]
    InvalidJob { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report formatting failed")]
    Format(#[from] std::fmt::Error),
}

impl PaintError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaintError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PaintError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PaintError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            PaintError::InvalidOpeningSpec { .. } => ErrorCode::InvalidOpeningSpec,
            PaintError::NegativeValue { .. } => ErrorCode::NegativeValue,
            PaintError::InvalidJob { .. } => ErrorCode::InvalidJob,
            PaintError::Io(_) => ErrorCode::ParseError,
            PaintError::Format(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

impl From<serde_json::Error> for PaintError {
    fn from(err: serde_json::Error) -> Self {
        PaintError::InvalidJob {
            message: err.to_string(),
        }
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, PaintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PaintError::InvalidNumber {
            field: "height".into(),
            value: "abc".into(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidNumber);
        assert_eq!(err.code_value(), 100);

        let err = PaintError::FileNotFound {
            path: PathBuf::from("room.json"),
        };
        assert_eq!(err.code_value(), -1);
    }

    #[test]
    fn test_negative_value_message() {
        let err = PaintError::NegativeValue {
            field: "width".into(),
            value: -3.0,
        };
        assert_eq!(err.code_value(), 102);
        assert_eq!(
            err.to_string(),
            "Invalid value for 'width': must not be negative, got -3"
        );
    }

    #[test]
    fn test_serde_error_becomes_invalid_job() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PaintError = json_err.into();
        assert_eq!(err.code(), ErrorCode::InvalidJob);
        assert!(err.to_string().starts_with("Invalid job file"));
    }
}
