// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Message sent to clients for every failure that is not explicitly handled
pub const INTERNAL_ERROR_MSG: &str = "Internal server error";

/// Application-specific error types
/// DOCUMENTATION: Every failure a request can hit on its way through
/// handlers, services and repositories. Application variants carry the
/// exact message sent to the client; database errors are translated by
/// SQLSTATE in `ApiError::resolve`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Query-string value failed validation (sort_by, order, limit, p)
    #[error("{0}")]
    InvalidQuery(String),

    /// Malformed path segment or request body
    #[error("{0}")]
    InvalidInput(String),

    /// Required field absent from a create request
    #[error("{0}")]
    MissingField(String),

    #[error("No valid vote change was included on the request body")]
    InvalidVote,

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected failure; the detail is logged, never sent
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A single step of the translation chain
type Translator = fn(&ApiError) -> Option<(StatusCode, String)>;

/// Translation chain, tried in order; first match wins
const TRANSLATORS: [Translator; 2] = [application_error, database_error];

/// Errors raised by the application itself carry their status and message
fn application_error(err: &ApiError) -> Option<(StatusCode, String)> {
    match err {
        ApiError::InvalidQuery(msg) | ApiError::InvalidInput(msg) | ApiError::MissingField(msg) => {
            Some((StatusCode::BAD_REQUEST, msg.clone()))
        }
        ApiError::InvalidVote => Some((StatusCode::BAD_REQUEST, err.to_string())),
        ApiError::NotFound(msg) => Some((StatusCode::NOT_FOUND, msg.clone())),
        ApiError::Database(_) | ApiError::Internal(_) => None,
    }
}

/// Constraint violations reported by PostgreSQL become client errors
fn database_error(err: &ApiError) -> Option<(StatusCode, String)> {
    match err {
        ApiError::Database(sqlx::Error::Database(db_err)) => db_err
            .code()
            .and_then(|code| constraint_message(&code))
            .map(|msg| (StatusCode::BAD_REQUEST, msg.to_string())),
        _ => None,
    }
}

/// Map a PostgreSQL SQLSTATE code to the client-facing message
pub fn constraint_message(code: &str) -> Option<&'static str> {
    match code {
        // invalid_text_representation
        "22P02" => Some("Value does not match expected data type"),
        // not_null_violation
        "23502" => Some("Expected value cannot be null"),
        // foreign_key_violation
        "23503" => Some("Required value does not exist"),
        _ => None,
    }
}

impl ApiError {
    /// Run the translation chain; `None` means the error is unhandled
    pub fn resolve(&self) -> Option<(StatusCode, String)> {
        TRANSLATORS.iter().find_map(|translate| translate(self))
    }
}

/// Convert ApiError to HTTP response
/// DOCUMENTATION: Body is always `{"msg": ...}`; unhandled errors are
/// logged and collapse to a generic 500
impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let (status, msg) = self.resolve().unwrap_or_else(|| {
            log::error!("Unhandled error: {}", self);
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG.to_string())
        });

        HttpResponse::build(status).json(json!({ "msg": msg }))
    }

    fn status_code(&self) -> StatusCode {
        self.resolve()
            .map(|(status, _)| status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_msg(err: ApiError) -> (StatusCode, String) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body["msg"].as_str().unwrap().to_string())
    }

    #[test]
    fn test_constraint_codes() {
        assert_eq!(
            constraint_message("22P02"),
            Some("Value does not match expected data type")
        );
        assert_eq!(
            constraint_message("23502"),
            Some("Expected value cannot be null")
        );
        assert_eq!(
            constraint_message("23503"),
            Some("Required value does not exist")
        );
        // unique_violation is not translated
        assert_eq!(constraint_message("23505"), None);
    }

    #[actix_rt::test]
    async fn test_application_errors_keep_their_message() {
        let (status, msg) = body_msg(ApiError::InvalidQuery("Invalid order query".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Invalid order query");

        let (status, msg) = body_msg(ApiError::NotFound("Review does not exist".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Review does not exist");

        let (status, msg) = body_msg(ApiError::InvalidVote).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "No valid vote change was included on the request body");
    }

    #[actix_rt::test]
    async fn test_unhandled_errors_are_hidden() {
        let (status, msg) = body_msg(ApiError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, INTERNAL_ERROR_MSG);

        let (status, msg) = body_msg(ApiError::Internal("pool exhausted".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, INTERNAL_ERROR_MSG);
    }

    #[test]
    fn test_status_code_matches_response() {
        assert_eq!(
            ApiError::MissingField("Missing valid body information".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
