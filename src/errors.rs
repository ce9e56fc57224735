use crate::domain::contact::FieldError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub enum AppError {
    // Rate limiting
    RateLimitExceeded { retry_after_secs: u64 },

    // Validation errors
    Validation(Vec<FieldError>),

    // Malformed requests
    BadRequest(String),

    // Email dispatch errors
    EmailDelivery(String),

    // Configuration errors
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::RateLimitExceeded { retry_after_secs } => {
                write!(f, "Rate limit exceeded, retry after {}s", retry_after_secs)
            }
            AppError::Validation(errors) => {
                write!(f, "Validation error ({} invalid fields)", errors.len())
            }
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::EmailDelivery(msg) => write!(f, "Email delivery failed: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Implement IntoResponse for Axum
//
// Response bodies follow the contact API envelope: every error carries
// `success: false` plus a user-facing message. Validation failures add a
// field-level error list, rate limiting adds a machine-readable retry hint.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::RateLimitExceeded { retry_after_secs } => {
                let body = Json(json!({
                    "success": false,
                    "message": "Too many requests. Please try again later.",
                    "retryAfter": retry_after_secs,
                }));
                let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
                if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
                response
            }
            AppError::Validation(errors) => {
                let body = Json(json!({
                    "success": false,
                    "message": "Validation error",
                    "errors": errors,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::BadRequest(message) => {
                let body = Json(json!({
                    "success": false,
                    "message": message,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::EmailDelivery(_) => {
                tracing::error!("Email delivery error: {}", self);
                let body = Json(json!({
                    "success": false,
                    "message": "Failed to send message. Please try again later.",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Configuration(_) => {
                tracing::error!("Configuration error: {:?}", self);
                let body = Json(json!({
                    "success": false,
                    "message": "Something went wrong!",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_response_carries_retry_after_header() {
        let response = AppError::RateLimitExceeded {
            retry_after_secs: 890,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER),
            Some(&HeaderValue::from_static("890"))
        );
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::Validation(vec![FieldError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        }])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn email_delivery_maps_to_internal_error() {
        let response = AppError::EmailDelivery("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
