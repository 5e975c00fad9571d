// src/db/comment_repository.rs
// DOCUMENTATION: Comment database operations

use crate::errors::ApiError;
use crate::models::{Comment, Pagination};
use sqlx::PgPool;

const COMMENT_NOT_FOUND_MSG: &str = "Comment does not exist";

pub struct CommentRepository;

impl CommentRepository {
    /// Comments on a review, newest first
    pub async fn get_by_review(
        pool: &PgPool,
        review_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Comment>, ApiError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT * FROM comments
            WHERE review_id = $1
            ORDER BY created_at DESC, comment_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(review_id)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch comments for review {}: {}", review_id, e);
            ApiError::from(e)
        })?;

        Ok(comments)
    }

    pub async fn create(
        pool: &PgPool,
        review_id: i32,
        author: &str,
        body: &str,
    ) -> Result<Comment, ApiError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (body, author, review_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(body)
        .bind(author)
        .bind(review_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::warn!("Failed to create comment on review {}: {}", review_id, e);
            ApiError::from(e)
        })?;

        log::info!("Created comment {} on review {}", comment.comment_id, review_id);
        Ok(comment)
    }

    pub async fn update_votes(pool: &PgPool, comment_id: i32, delta: i32) -> Result<Comment, ApiError> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 RETURNING *",
        )
        .bind(delta)
        .bind(comment_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Vote update failed for comment {}: {}", comment_id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(COMMENT_NOT_FOUND_MSG.to_string()))
    }

    pub async fn delete(pool: &PgPool, comment_id: i32) -> Result<(), ApiError> {
        let rows = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for comment {}: {}", comment_id, e);
                ApiError::from(e)
            })?
            .rows_affected();

        if rows == 0 {
            return Err(ApiError::NotFound(COMMENT_NOT_FOUND_MSG.to_string()));
        }

        log::info!("Deleted comment: {}", comment_id);
        Ok(())
    }
}
