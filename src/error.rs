//! Error types for site plan operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported by the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed layout file (-3)
    ParseError = -3,
    /// Grid step is zero, negative or not finite (E100)
    InvalidGridStep = 100,
    /// Coordinate is NaN or infinite (E101)
    NonFiniteCoordinate = 101,
    /// Layout failed validation (E200)
    ValidationFailed = 200,
}

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid grid step {step}: must be a positive finite number")]
    InvalidGridStep { step: f64 },

    #[error("Non-finite coordinate: ({x}, {z})")]
    NonFiniteCoordinate { x: f64, z: f64 },

    #[error("Layout validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Malformed layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::InvalidGridStep { .. } => ErrorCode::InvalidGridStep,
            PlanError::NonFiniteCoordinate { .. } => ErrorCode::NonFiniteCoordinate,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::Json(_) => ErrorCode::ParseError,
            PlanError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
