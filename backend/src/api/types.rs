//! HTTP error mapping.
//!
//! Success bodies are the bare operation result; every failure becomes a
//! `{code, message}` JSON body. Operational errors are returned verbatim.
//! Non-operational detail is replaced with the generic reason phrase in
//! production, and expanded with a `detail` field in development.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::logs::log_error;
use crate::config::Environment;
use crate::error::ApiError;

/// JSON body for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub code: u16,

    /// Human-readable message.
    pub message: String,

    /// Debug representation of the underlying error (development only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// HTTP status for each error variant.
pub fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::FileNotFound | ApiError::FilePathNotFound => StatusCode::BAD_REQUEST,
        ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::Csv(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the status and body for a failed request.
pub fn error_body(err: &ApiError, env: Environment) -> (StatusCode, ErrorBody) {
    let status = status_for(err);

    let message = if env.is_production() && !err.is_operational() {
        status
            .canonical_reason()
            .unwrap_or("Internal Server Error")
            .to_string()
    } else {
        err.to_string()
    };

    let detail = if env.is_development() {
        Some(format!("{:?}", err))
    } else {
        None
    };

    let body = ErrorBody {
        code: status.as_u16(),
        message,
        detail,
    };

    (status, body)
}

/// Render a failed request as an HTTP response, logging the full error.
pub fn error_response(err: &ApiError, env: Environment) -> Response {
    log_error(format!("request failed: {}", err));

    let (status, body) = error_body(err, env);
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CsvError, ValidationError};

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&ApiError::FileNotFound), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ApiError::FilePathNotFound), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&ApiError::Validation(ValidationError::InvalidSize)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&ApiError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_operational_message_survives_production() {
        let err = ApiError::Validation(ValidationError::InvalidCharacters);
        let (status, body) = error_body(&err, Environment::Production);

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, 422);
        assert_eq!(body.message, "Matrix contains invalid characters");
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_non_operational_detail_suppressed_in_production() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk exploded");
        let err = ApiError::from(CsvError::from(io_err));
        let (status, body) = error_body(&err, Environment::Production);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
        assert!(!body.message.contains("disk exploded"));
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_development_includes_detail() {
        let err = ApiError::Internal("boom".into());
        let (_, body) = error_body(&err, Environment::Development);

        assert!(body.detail.is_some());
        assert!(body.detail.unwrap().contains("boom"));
    }

    #[test]
    fn test_body_json_shape() {
        let err = ApiError::FileNotFound;
        let (_, body) = error_body(&err, Environment::Production);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], "File not found.");
        assert!(json.get("detail").is_none());
    }
}
