//! Error types and handling
//!
//! Common error types used across the application.

use crate::recorder::RecordingError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Recording error: {0}")]
    Recording(#[from] RecordingError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error response for the UI host
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let code = match &error {
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Recording(e) => match e {
                RecordingError::InvalidTransition { .. } => "INVALID_TRANSITION",
                RecordingError::TimerAlreadyActive => "TIMER_ALREADY_ACTIVE",
                RecordingError::TimerNotActive => "TIMER_NOT_ACTIVE",
                RecordingError::SourceMismatch { .. } => "SOURCE_MISMATCH",
                RecordingError::UnknownSource { .. } => "UNKNOWN_SOURCE",
                RecordingError::SurfaceClosed => "SURFACE_CLOSED",
                RecordingError::RuntimeUnavailable => "RUNTIME_UNAVAILABLE",
            },
            AppError::Config(_) => "CONFIG_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<RecordingError> for ErrorResponse {
    fn from(error: RecordingError) -> Self {
        AppError::from(error).into()
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
