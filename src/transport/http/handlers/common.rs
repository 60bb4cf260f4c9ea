use crate::domain::model::ValidationError;
use crate::transport::http::types::ApiMessage;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use std::fmt::Display;

pub type ErrorResponse = (StatusCode, Json<ApiMessage>);

pub fn not_found(message: &str) -> ErrorResponse {
    (StatusCode::NOT_FOUND, Json(ApiMessage::new(message)))
}

pub fn invalid_payload(message: &str, detail: impl Display) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiMessage::new(message).with_detail(detail)),
    )
}

/// Unwraps a JSON body and runs its boundary validation.
///
/// Both a malformed body and a failed validation map to `400 {message}`.
pub fn validated<T>(
    body: Result<Json<T>, JsonRejection>,
    validate: impl FnOnce(&T) -> Result<(), ValidationError>,
    message: &str,
) -> Result<T, ErrorResponse> {
    let Json(payload) = body.map_err(|e| invalid_payload(message, e.body_text()))?;
    validate(&payload).map_err(|e| invalid_payload(message, e))?;
    Ok(payload)
}
