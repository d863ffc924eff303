use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;
use crate::submission::{SubmitError, ValidationError};

pub const FIELDS_REQUIRED: &str = "❌ All fields are required";
pub const SUBMIT_FAILED: &str = "Server error, please try again later.";
pub const LIST_FAILED: &str = "❌ Failed to fetch messages.";

/// Errors surfaced to HTTP callers. Bodies are plain text.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(ValidationError),
    /// Store failure; `message` is what the caller sees, `source` is only logged.
    Store {
        message: &'static str,
        source: StoreError,
    },
}

impl AppError {
    pub fn store(message: &'static str, source: StoreError) -> Self {
        AppError::Store { message, source }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Validation(err) => write!(f, "Validation failed: {err}"),
            AppError::Store { source, .. } => write!(f, "Store Error: {source}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected contact body: {msg}");
                (StatusCode::BAD_REQUEST, FIELDS_REQUIRED).into_response()
            }
            AppError::Validation(err) => {
                tracing::debug!("Rejected contact form: {err}");
                (StatusCode::BAD_REQUEST, FIELDS_REQUIRED).into_response()
            }
            AppError::Store { message, source } => {
                tracing::error!("Store error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Validation(err) => AppError::Validation(err),
            SubmitError::Store(err) => AppError::store(SUBMIT_FAILED, err),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

/// Fatal errors before or while serving. The process exits on any of these.
#[derive(Debug)]
pub enum StartupError {
    Store(StoreError),
    Io(std::io::Error),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Store(err) => write!(f, "Document store connection error: {err}"),
            StartupError::Io(err) => write!(f, "Server I/O error: {err}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Store(err) => Some(err),
            StartupError::Io(err) => Some(err),
        }
    }
}

impl From<StoreError> for StartupError {
    fn from(err: StoreError) -> Self {
        StartupError::Store(err)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(err: std::io::Error) -> Self {
        StartupError::Io(err)
    }
}
