// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered platform user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
