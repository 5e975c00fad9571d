// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for users

use crate::db::UserRepository;
use crate::errors::ApiError;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /api/users
pub async fn get_users(pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let users = UserRepository::fetch_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

/// GET /api/users/{username}
pub async fn get_user(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let user = UserRepository::fetch_by_username(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::get().to(get_users))
            .route("/{username}", web::get().to(get_user)),
    );
}
