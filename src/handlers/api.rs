// src/handlers/api.rs
// DOCUMENTATION: API description and fallback handlers
// PURPOSE: Serve the endpoint document and answer unmatched routes

use crate::errors::ApiError;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

/// Endpoint description document, embedded at compile time
const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

/// GET /api
pub async fn get_endpoints() -> Result<impl Responder, ApiError> {
    let endpoints: Value = serde_json::from_str(ENDPOINTS_JSON)
        .map_err(|e| ApiError::Internal(format!("endpoints.json is invalid: {}", e)))?;
    Ok(HttpResponse::Ok().json(json!({ "endpoints": endpoints })))
}

/// Default service for any route that matched nothing
pub async fn endpoint_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound("Endpoint does not exist".to_string()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api", web::get().to(get_endpoints));
}
