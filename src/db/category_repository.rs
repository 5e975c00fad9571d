// src/db/category_repository.rs
// DOCUMENTATION: Category database operations

use crate::errors::ApiError;
use crate::models::Category;
use sqlx::PgPool;

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Category>, ApiError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT slug, description FROM categories ORDER BY slug")
                .fetch_all(pool)
                .await
                .map_err(|e| {
                    log::error!("Failed to fetch categories: {}", e);
                    ApiError::from(e)
                })?;

        Ok(categories)
    }

    /// Insert a category; a duplicate slug surfaces as a database error
    pub async fn insert(pool: &PgPool, slug: &str, description: &str) -> Result<Category, ApiError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (slug, description)
            VALUES ($1, $2)
            RETURNING slug, description
            "#,
        )
        .bind(slug)
        .bind(description)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create category {}: {}", slug, e);
            ApiError::from(e)
        })?;

        log::info!("Created category: {}", category.slug);
        Ok(category)
    }
}
