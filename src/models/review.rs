// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Image used when a review is created without one
pub const DEFAULT_REVIEW_IMG_URL: &str =
    "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg";

/// Board game review as stored in the reviews table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub review_id: i32,
    pub owner: String,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub category: String,
    pub review_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Single review with its live comment count (GET /api/reviews/{id})
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub comment_count: i32,
}

/// Review list item; omits the body
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewSummary {
    pub owner: String,
    pub title: String,
    pub review_id: i32,
    pub category: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub designer: String,
    pub comment_count: i32,
}

/// Raw query string for GET /api/reviews
/// DOCUMENTATION: Every value stays untyped until validated by
/// `ReviewListParams::from_query`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewListQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
    /// Page number
    pub p: Option<String>,
}

/// One page of the review listing
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPage {
    pub total_count: i64,
    pub page: i64,
    pub reviews: Vec<ReviewSummary>,
}

/// Request DTO for POST /api/reviews
/// DOCUMENTATION: Absent fields are passed through as NULL so the
/// NOT NULL and foreign key constraints decide; non-string values are
/// rejected while the body is parsed
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub owner: Option<String>,
    pub title: Option<String>,
    pub review_body: Option<String>,
    pub designer: Option<String>,
    pub category: Option<String>,
    pub review_img_url: Option<String>,
}

impl CreateReviewRequest {
    pub fn img_url(&self) -> &str {
        self.review_img_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_REVIEW_IMG_URL)
    }
}
