// src/db/exists.rs
// DOCUMENTATION: Shared row-existence check
// PURPOSE: Tell "filter matched nothing" apart from "filter value is unknown"

use crate::errors::ApiError;
use sqlx::{Encode, PgPool, Postgres, Type};

pub const RESOURCE_NOT_FOUND_MSG: &str = "Resource not found in the database";

/// Table/column pairs that can be checked
/// DOCUMENTATION: Identifiers come only from this enum, never from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    CategorySlug,
    ReviewId,
}

impl Lookup {
    pub fn table(self) -> &'static str {
        match self {
            Lookup::CategorySlug => "categories",
            Lookup::ReviewId => "reviews",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Lookup::CategorySlug => "slug",
            Lookup::ReviewId => "review_id",
        }
    }

    fn sql(self) -> &'static str {
        match self {
            Lookup::CategorySlug => "SELECT EXISTS (SELECT 1 FROM categories WHERE slug = $1)",
            Lookup::ReviewId => "SELECT EXISTS (SELECT 1 FROM reviews WHERE review_id = $1)",
        }
    }
}

/// Succeed if a row matching `value` exists, otherwise 404
/// DOCUMENTATION: One fresh read per call, nothing is cached
pub async fn check_exists<'q, T>(pool: &PgPool, lookup: Lookup, value: T) -> Result<(), ApiError>
where
    T: 'q + Send + Encode<'q, Postgres> + Type<Postgres>,
{
    let (found,): (bool,) = sqlx::query_as(lookup.sql())
        .bind(value)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!(
                "Existence check on {}.{} failed: {}",
                lookup.table(),
                lookup.column(),
                e
            );
            ApiError::from(e)
        })?;

    if found {
        Ok(())
    } else {
        log::warn!("No row in {}.{} for lookup", lookup.table(), lookup.column());
        Err(ApiError::NotFound(RESOURCE_NOT_FOUND_MSG.to_string()))
    }
}
