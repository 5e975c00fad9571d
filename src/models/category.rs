// src/models/category.rs

use crate::errors::ApiError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Board game category, keyed by slug
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// Request DTO for POST /api/categories
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(required, length(min = 1))]
    pub slug: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    /// Validate presence of both fields, reporting the slug first
    pub fn validated(&self) -> Result<(&str, &str), ApiError> {
        if let Err(errors) = self.validate() {
            let fields = errors.field_errors();
            let field = if fields.contains_key("slug") {
                "slug"
            } else {
                "description"
            };
            return Err(ApiError::MissingField(format!(
                "Category should include a valid {}",
                field
            )));
        }

        Ok((
            self.slug.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default(),
        ))
    }
}
