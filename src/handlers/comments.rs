// src/handlers/comments.rs
// DOCUMENTATION: HTTP handlers for comments

use crate::errors::ApiError;
use crate::handlers::extractors::vote_body_error_handler;
use crate::models::{CreateCommentRequest, PageQuery, VoteUpdateRequest};
use crate::services::CommentService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /api/reviews/{review_id}/comments
/// Query: limit, p
pub async fn get_review_comments(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, ApiError> {
    let comments =
        CommentService::comments_for_review(pool.get_ref(), path.into_inner(), &query).await?;
    Ok(HttpResponse::Ok().json(json!({ "comments": comments })))
}

/// POST /api/reviews/{review_id}/comments
pub async fn create_comment(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<CreateCommentRequest>,
) -> Result<impl Responder, ApiError> {
    let comment = CommentService::add_comment(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Created().json(json!({ "comment": comment })))
}

/// PATCH /api/comments/{comment_id}
pub async fn patch_comment(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<VoteUpdateRequest>,
) -> Result<impl Responder, ApiError> {
    let comment = CommentService::vote_on_comment(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(json!({ "comment": comment })))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    CommentService::delete_comment(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/comments").service(
            web::resource("/{comment_id}")
                .app_data(web::JsonConfig::default().error_handler(vote_body_error_handler))
                .route(web::patch().to(patch_comment))
                .route(web::delete().to(delete_comment)),
        ),
    );
}
