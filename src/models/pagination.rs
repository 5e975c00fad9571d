// src/models/pagination.rs

use crate::errors::ApiError;
use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_PAGE: i64 = 1;

const INVALID_PAGINATION_MSG: &str = "Limit and page queries should be a number value";

/// Raw `limit` / `p` query values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
}

impl Pagination {
    /// Parse raw values; both must be positive integers when present and
    /// the resulting offset must fit in an i64
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Result<Self, ApiError> {
        let pagination = Pagination {
            limit: parse_positive(limit, DEFAULT_LIMIT)?,
            page: parse_positive(page, DEFAULT_PAGE)?,
        };
        pagination.checked_offset().ok_or_else(invalid_pagination)?;
        Ok(pagination)
    }

    pub fn offset(&self) -> i64 {
        self.checked_offset().unwrap_or(i64::MAX)
    }

    fn checked_offset(&self) -> Option<i64> {
        self.page.checked_sub(1)?.checked_mul(self.limit)
    }
}

impl TryFrom<&PageQuery> for Pagination {
    type Error = ApiError;

    fn try_from(query: &PageQuery) -> Result<Self, Self::Error> {
        Pagination::parse(query.limit.as_deref(), query.p.as_deref())
    }
}

fn parse_positive(raw: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(invalid_pagination),
    }
}

fn invalid_pagination() -> ApiError {
    ApiError::InvalidQuery(INVALID_PAGINATION_MSG.to_string())
}
