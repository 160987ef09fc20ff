//! Route handlers
//!
//! Handlers validate input, call into the mentorship core and map core
//! errors to [`ApiError`](crate::error::ApiError) responses.

pub mod mentors;
pub mod students;
pub mod system;

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::ApiError;
use crate::validation::FieldError;

/// Unwrap a JSON body or turn the rejection into a validation error
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ApiError::validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
        )])),
    }
}

/// Parse a single required id
pub(crate) fn parse_id<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(vec![FieldError::new(field, "must be a valid UUID")]))
}
