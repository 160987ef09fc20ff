//! WebServer-specific error types
//!
//! `WebServerError` covers startup and configuration. `ApiError` is what
//! handlers return; it renders the JSON error body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mentorship::MentorshipError;
use serde::Serialize;
use shared::{Component, SharedError, component_error};
use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}: {reason}")]
    ServerStartupFailed { address: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Storage initialisation failed: {0}")]
    Storage(#[from] MentorshipError),

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

/// Generic message returned for every server-side fault
pub const INTERNAL_MESSAGE: &str = "Something went wrong";

/// JSON error body
///
/// Validation failures list every offending field; everything else carries
/// a stable `code` and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Error { code: String, message: String },
    Fields { errors: Vec<FieldError> },
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn coded(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody::Error {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::Fields { errors },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::coded(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn internal() -> Self {
        Self::coded(StatusCode::INTERNAL_SERVER_ERROR, "internal", INTERNAL_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<MentorshipError> for ApiError {
    fn from(err: MentorshipError) -> Self {
        match err {
            MentorshipError::Validation { field, message } => {
                Self::validation(vec![FieldError::new(field, message)])
            }
            MentorshipError::NotFound { .. } => Self::not_found(err.to_string()),
            MentorshipError::Conflict { message } => {
                Self::coded(StatusCode::CONFLICT, "conflict", message)
            }
            MentorshipError::AlreadyAssigned { .. } => {
                Self::coded(StatusCode::CONFLICT, "already_assigned", err.to_string())
            }
            MentorshipError::NoHistory { .. } => {
                Self::coded(StatusCode::NOT_FOUND, "no_history", err.to_string())
            }
            MentorshipError::SharedError(SharedError::InvalidId { kind, input }) => {
                Self::validation(vec![FieldError::new(
                    format!("{kind}Id"),
                    format!("'{input}' is not a valid id"),
                )])
            }
            MentorshipError::Integrity { .. }
            | MentorshipError::StorageUnavailable { .. }
            | MentorshipError::SharedError(_) => {
                component_error!(Component::WebServer, error = %err, "Request failed");
                Self::internal()
            }
        }
    }
}
