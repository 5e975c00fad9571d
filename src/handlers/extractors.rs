// src/handlers/extractors.rs
// DOCUMENTATION: Extractor rejection handlers
// PURPOSE: Route malformed paths, queries and bodies through ApiError so
// every failure has the same `{"msg": ...}` shape

use crate::errors::ApiError;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest};

pub const INVALID_ID_MSG: &str = "Value does not match expected data type";
pub const INVALID_QUERY_MSG: &str = "Invalid query";

/// Non-numeric ids in the path (e.g. /api/reviews/banana)
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log::debug!("Rejected path {}: {}", req.path(), err);
    ApiError::InvalidInput(INVALID_ID_MSG.to_string()).into()
}

/// Query strings that cannot be deserialized at all (e.g. a repeated key)
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Rejected query on {}: {}", req.path(), err);
    ApiError::InvalidQuery(INVALID_QUERY_MSG.to_string()).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Rejected body on {}: {}", req.path(), err);
    ApiError::InvalidInput("Invalid request body".to_string()).into()
}

/// POST /api/reviews: every field must be a string
pub fn review_body_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Rejected review body on {}: {}", req.path(), err);
    ApiError::InvalidInput("Values should only be strings".to_string()).into()
}

/// PATCH bodies that cannot be read at all carry no vote change
pub fn vote_body_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Rejected vote body on {}: {}", req.path(), err);
    ApiError::InvalidVote.into()
}
