// src/db/user_repository.rs
// DOCUMENTATION: User database operations

use crate::errors::ApiError;
use crate::models::User;
use sqlx::PgPool;

pub struct UserRepository;

impl UserRepository {
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users ORDER BY username",
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch users: {}", e);
            ApiError::from(e)
        })?;

        Ok(users)
    }

    pub async fn fetch_by_username(pool: &PgPool, username: &str) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user {}: {}", username, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| {
            log::warn!("User not found: {}", username);
            ApiError::NotFound("User does not exist".to_string())
        })
    }
}
