//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction to keep error shapes uniform
//! across console endpoints.
//!
//! # Key invariants and assumptions
//! - Error responses must include a stable `code` and human-readable `message`.
//! - Status codes must align with the error category.
//! - Access denial on guarded pages is a redirect, not an `ApiError`; these
//!   helpers cover API-style failures only.
//!
//! # Security considerations
//! - Internal errors log details server-side but return generic messages.
//! - Login failures never say which of email or password was wrong.
use crate::api::types::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::fmt::Display;

/// Structured API error returned by handlers.
///
/// # Invariants
/// - `status` must match the semantics of `body.code`.
///
/// # Example
/// ```rust
/// use axum::http::StatusCode;
/// use perceive_console::api::error::api_forbidden;
///
/// let err = api_forbidden("settings are restricted");
/// assert_eq!(err.status, StatusCode::FORBIDDEN);
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, message: &str) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
                request_id: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Build a 400 Bad Request error for malformed or incomplete input.
pub fn api_bad_request(message: &str) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, "bad_request", message)
}

/// Build a 401 Unauthorized error.
pub fn api_unauthorized(message: &str) -> ApiError {
    ApiError::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
}

/// Build a 403 Forbidden error.
///
/// # What it does
/// Used when a signed-in principal reaches a handler whose panel gate
/// rejects it.
pub fn api_forbidden(message: &str) -> ApiError {
    ApiError::new(StatusCode::FORBIDDEN, "forbidden", message)
}

pub fn api_not_found(message: &str) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "not_found", message)
}

/// Build a 500 Internal Server Error.
///
/// # What it does
/// Logs `err` and returns a generic internal error response.
pub fn api_internal(message: &str, err: &dyn Display) -> ApiError {
    tracing::error!(error = %err, "console internal error");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_helpers_build_expected_codes() {
        let bad_request = api_bad_request("missing email");
        assert_eq!(bad_request.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad_request.body.code, "bad_request");

        let unauthorized = api_unauthorized("nope");
        assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unauthorized.body.code, "unauthorized");

        let forbidden = api_forbidden("nope");
        assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
        assert_eq!(forbidden.body.code, "forbidden");

        let not_found = api_not_found("missing");
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.body.code, "not_found");
    }

    #[test]
    fn api_internal_hides_the_cause() {
        let api = api_internal("cookie encoding failed", &"invalid header byte");
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.code, "internal");
        assert_eq!(api.body.message, "cookie encoding failed");
    }
}
