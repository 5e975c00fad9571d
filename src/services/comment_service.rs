// src/services/comment_service.rs
// DOCUMENTATION: Business logic for comments
// PURPOSE: Comments only exist under a review; the review is checked first

use crate::db::{check_exists, CommentRepository, Lookup, REVIEW_NOT_FOUND_MSG};
use crate::errors::ApiError;
use crate::models::{Comment, CreateCommentRequest, PageQuery, Pagination, VoteUpdateRequest};
use sqlx::PgPool;

pub struct CommentService;

impl CommentService {
    /// Paginated comments for a review; unknown review is a 404
    pub async fn comments_for_review(
        pool: &PgPool,
        review_id: i32,
        query: &PageQuery,
    ) -> Result<Vec<Comment>, ApiError> {
        let pagination = Pagination::try_from(query)?;
        ensure_review(pool, review_id).await?;
        CommentRepository::get_by_review(pool, review_id, pagination).await
    }

    /// Add a comment; an unknown author is rejected by the foreign key
    pub async fn add_comment(
        pool: &PgPool,
        review_id: i32,
        req: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        let (author, body) = req.validated()?;
        ensure_review(pool, review_id).await?;
        CommentRepository::create(pool, review_id, author, body).await
    }

    pub async fn vote_on_comment(
        pool: &PgPool,
        comment_id: i32,
        req: &VoteUpdateRequest,
    ) -> Result<Comment, ApiError> {
        let delta = req.delta()?;
        CommentRepository::update_votes(pool, comment_id, delta).await
    }

    pub async fn delete_comment(pool: &PgPool, comment_id: i32) -> Result<(), ApiError> {
        CommentRepository::delete(pool, comment_id).await
    }
}

/// 404 "Review does not exist" unless the review row is present
async fn ensure_review(pool: &PgPool, review_id: i32) -> Result<(), ApiError> {
    check_exists(pool, Lookup::ReviewId, review_id)
        .await
        .map_err(|err| match err {
            ApiError::NotFound(_) => ApiError::NotFound(REVIEW_NOT_FOUND_MSG.to_string()),
            other => other,
        })
}
