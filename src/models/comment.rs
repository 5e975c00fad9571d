// src/models/comment.rs

use crate::errors::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Comment left on a review
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub author: String,
    pub review_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /api/reviews/{review_id}/comments
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Author of the comment, must be an existing user
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    pub body: Option<String>,
}

impl CreateCommentRequest {
    /// Returns `(author, body)` once both are present and non-empty
    pub fn validated(&self) -> Result<(&str, &str), ApiError> {
        if let Err(errors) = self.validate() {
            let fields = errors.field_errors();
            let missing = match (fields.contains_key("body"), fields.contains_key("username")) {
                (true, true) => "body and author",
                (true, false) => "body",
                _ => "author",
            };
            return Err(ApiError::MissingField(format!(
                "Missing valid {} information",
                missing
            )));
        }

        Ok((
            self.username.as_deref().unwrap_or_default(),
            self.body.as_deref().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, body: Option<&str>) -> CreateCommentRequest {
        CreateCommentRequest {
            username: username.map(String::from),
            body: body.map(String::from),
        }
    }

    #[test]
    fn test_valid_comment() {
        let req = request(Some("mallionaire"), Some("Great game"));
        assert_eq!(req.validated().unwrap(), ("mallionaire", "Great game"));
    }

    #[test]
    fn test_missing_messages() {
        let cases = [
            (request(Some("mallionaire"), None), "Missing valid body information"),
            (request(None, Some("Great game")), "Missing valid author information"),
            (request(None, None), "Missing valid body and author information"),
            (request(Some("mallionaire"), Some("")), "Missing valid body information"),
        ];

        for (req, expected) in cases {
            assert_eq!(req.validated().unwrap_err().to_string(), expected);
        }
    }
}
