// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for reviews and their comments
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::comments;
use crate::handlers::extractors::{review_body_error_handler, vote_body_error_handler};
use crate::models::{CreateReviewRequest, ReviewListQuery, VoteUpdateRequest};
use crate::services::ReviewService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /api/reviews
/// Query: sort_by, order, category, limit, p
pub async fn get_reviews(
    pool: web::Data<PgPool>,
    query: web::Query<ReviewListQuery>,
) -> Result<impl Responder, ApiError> {
    let page = ReviewService::list_reviews(pool.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/reviews
pub async fn create_review(
    pool: web::Data<PgPool>,
    req: web::Json<CreateReviewRequest>,
) -> Result<impl Responder, ApiError> {
    let review = ReviewService::create_review(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({ "review": review })))
}

/// GET /api/reviews/{review_id}
pub async fn get_review(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let review = ReviewService::get_review(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "review": review })))
}

/// PATCH /api/reviews/{review_id}
pub async fn patch_review(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<VoteUpdateRequest>,
) -> Result<impl Responder, ApiError> {
    let review = ReviewService::vote_on_review(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(json!({ "review": review })))
}

/// DELETE /api/reviews/{review_id}
pub async fn delete_review(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    ReviewService::delete_review(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for review routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reviews")
            .service(
                web::resource("")
                    .app_data(web::JsonConfig::default().error_handler(review_body_error_handler))
                    .route(web::get().to(get_reviews))
                    .route(web::post().to(create_review)),
            )
            .service(
                web::resource("/{review_id}")
                    .app_data(web::JsonConfig::default().error_handler(vote_body_error_handler))
                    .route(web::get().to(get_review))
                    .route(web::patch().to(patch_review))
                    .route(web::delete().to(delete_review)),
            )
            .service(
                web::resource("/{review_id}/comments")
                    .route(web::get().to(comments::get_review_comments))
                    .route(web::post().to(comments::create_comment)),
            ),
    );
}
