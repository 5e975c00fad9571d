// src/handlers/categories.rs
// DOCUMENTATION: HTTP handlers for categories

use crate::db::CategoryRepository;
use crate::errors::ApiError;
use crate::models::CreateCategoryRequest;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /api/categories
pub async fn get_categories(pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let categories = CategoryRepository::fetch_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({ "categories": categories })))
}

/// POST /api/categories
pub async fn create_category(
    pool: web::Data<PgPool>,
    req: web::Json<CreateCategoryRequest>,
) -> Result<impl Responder, ApiError> {
    let (slug, description) = req.validated()?;
    let category = CategoryRepository::insert(pool.get_ref(), slug, description).await?;
    Ok(HttpResponse::Created().json(json!({ "category": category })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/categories")
            .route("", web::get().to(get_categories))
            .route("", web::post().to(create_category)),
    );
}
