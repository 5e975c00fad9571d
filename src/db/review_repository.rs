// src/db/review_repository.rs
// DOCUMENTATION: Review database operations
// PURPOSE: Listing, lookup, creation, voting and deletion of reviews

use crate::db::review_query::ReviewListParams;
use crate::errors::ApiError;
use crate::models::{CreateReviewRequest, Review, ReviewDetail, ReviewSummary};
use sqlx::PgPool;

pub const REVIEW_NOT_FOUND_MSG: &str = "Review does not exist";

pub struct ReviewRepository;

impl ReviewRepository {
    /// Run the listing in two passes
    /// DOCUMENTATION: Returns (page of summaries, total_count before pagination).
    /// The passes are separate statements, not one snapshot.
    pub async fn list(
        pool: &PgPool,
        params: &ReviewListParams,
    ) -> Result<(Vec<ReviewSummary>, i64), ApiError> {
        let mut count_builder = params.count_query();
        let (total_count,) = count_builder
            .build_query_as::<(i64,)>()
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Review count query error: {}", e);
                ApiError::from(e)
            })?;

        let mut page_builder = params.page_query();
        log::debug!("Executing review listing: {}", page_builder.sql());

        let reviews = page_builder
            .build_query_as::<ReviewSummary>()
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Review listing query error: {}", e);
                ApiError::from(e)
            })?;

        log::info!(
            "Review listing: {} results, {} total (page {})",
            reviews.len(),
            total_count,
            params.pagination.page
        );

        Ok((reviews, total_count))
    }

    /// Review with its live comment count
    pub async fn get_by_id(pool: &PgPool, review_id: i32) -> Result<ReviewDetail, ApiError> {
        sqlx::query_as::<_, ReviewDetail>(
            r#"
            SELECT reviews.*, COUNT(comments.review_id)::int AS comment_count
            FROM reviews
            LEFT OUTER JOIN comments ON comments.review_id = reviews.review_id
            WHERE reviews.review_id = $1
            GROUP BY reviews.review_id
            "#,
        )
        .bind(review_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching review {}: {}", review_id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| {
            log::warn!("Review not found: {}", review_id);
            ApiError::NotFound(REVIEW_NOT_FOUND_MSG.to_string())
        })
    }

    /// Insert a review
    /// DOCUMENTATION: Missing fields are bound as NULL; NOT NULL and the
    /// owner/category foreign keys reject them in the database
    pub async fn create(pool: &PgPool, req: &CreateReviewRequest) -> Result<Review, ApiError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (owner, title, review_body, designer, category, review_img_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&req.owner)
        .bind(&req.title)
        .bind(&req.review_body)
        .bind(&req.designer)
        .bind(&req.category)
        .bind(req.img_url())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::warn!("Failed to create review: {}", e);
            ApiError::from(e)
        })?;

        log::info!("Created review with id: {}", review.review_id);
        Ok(review)
    }

    pub async fn update_votes(pool: &PgPool, review_id: i32, delta: i32) -> Result<Review, ApiError> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET votes = votes + $1 WHERE review_id = $2 RETURNING *",
        )
        .bind(delta)
        .bind(review_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Vote update failed for review {}: {}", review_id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(REVIEW_NOT_FOUND_MSG.to_string()))
    }

    /// Hard delete; comments go with it through ON DELETE CASCADE
    pub async fn delete(pool: &PgPool, review_id: i32) -> Result<(), ApiError> {
        let rows = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for review {}: {}", review_id, e);
                ApiError::from(e)
            })?
            .rows_affected();

        if rows == 0 {
            return Err(ApiError::NotFound(REVIEW_NOT_FOUND_MSG.to_string()));
        }

        log::info!("Deleted review: {}", review_id);
        Ok(())
    }
}
