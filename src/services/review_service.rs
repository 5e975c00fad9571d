// src/services/review_service.rs
// DOCUMENTATION: Business logic for reviews
// PURPOSE: Intermediary between handlers and repository

use crate::db::{check_exists, Lookup, ReviewListParams, ReviewRepository};
use crate::errors::ApiError;
use crate::models::{
    CreateReviewRequest, Review, ReviewDetail, ReviewListQuery, ReviewPage, VoteUpdateRequest,
};
use sqlx::PgPool;

pub const EMPTY_CATEGORY_MSG: &str = "This category has no associated reviews";

pub struct ReviewService;

impl ReviewService {
    /// Sorted, filtered, paginated review listing
    /// DOCUMENTATION: An empty page for a category filter is a 404; the
    /// existence check decides whether the category itself is unknown.
    /// Without a filter an empty page is returned as-is.
    pub async fn list_reviews(pool: &PgPool, query: &ReviewListQuery) -> Result<ReviewPage, ApiError> {
        let params = ReviewListParams::from_query(query)?;
        let (reviews, total_count) = ReviewRepository::list(pool, &params).await?;

        if reviews.is_empty() {
            if let Some(category) = params.category.as_deref() {
                check_exists(pool, Lookup::CategorySlug, category).await?;
                return Err(ApiError::NotFound(EMPTY_CATEGORY_MSG.to_string()));
            }
        }

        Ok(ReviewPage {
            total_count,
            page: params.pagination.page,
            reviews,
        })
    }

    pub async fn get_review(pool: &PgPool, review_id: i32) -> Result<ReviewDetail, ApiError> {
        ReviewRepository::get_by_id(pool, review_id).await
    }

    pub async fn create_review(pool: &PgPool, req: CreateReviewRequest) -> Result<Review, ApiError> {
        ReviewRepository::create(pool, &req).await
    }

    /// Apply a vote delta; the delta is validated before any query runs
    pub async fn vote_on_review(
        pool: &PgPool,
        review_id: i32,
        req: &VoteUpdateRequest,
    ) -> Result<Review, ApiError> {
        let delta = req.delta()?;
        ReviewRepository::update_votes(pool, review_id, delta).await
    }

    pub async fn delete_review(pool: &PgPool, review_id: i32) -> Result<(), ApiError> {
        ReviewRepository::delete(pool, review_id).await
    }
}
