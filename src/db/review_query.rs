// src/db/review_query.rs
// DOCUMENTATION: Dynamic SQL for the review listing
// PURPOSE: Validate sort/filter/pagination input and build the count and
// page queries from it

use crate::errors::ApiError;
use crate::models::{Pagination, ReviewListQuery};
use sqlx::{Postgres, QueryBuilder};
use std::str::FromStr;

const LISTING_SELECT: &str = r#"SELECT reviews.owner, reviews.title, reviews.review_id, reviews.category,
    reviews.review_img_url, reviews.created_at, reviews.votes, reviews.designer,
    COUNT(comments.review_id)::int AS comment_count
FROM reviews
LEFT OUTER JOIN comments ON comments.review_id = reviews.review_id"#;

const COUNT_SELECT: &str = "SELECT COUNT(*) FROM reviews";

/// Columns the listing may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ReviewId,
    Title,
    Category,
    Designer,
    Owner,
    ReviewBody,
    ReviewImgUrl,
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 10] = [
        SortColumn::ReviewId,
        SortColumn::Title,
        SortColumn::Category,
        SortColumn::Designer,
        SortColumn::Owner,
        SortColumn::ReviewBody,
        SortColumn::ReviewImgUrl,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    /// Name accepted in the `sort_by` query
    pub fn name(self) -> &'static str {
        match self {
            SortColumn::ReviewId => "review_id",
            SortColumn::Title => "title",
            SortColumn::Category => "category",
            SortColumn::Designer => "designer",
            SortColumn::Owner => "owner",
            SortColumn::ReviewBody => "review_body",
            SortColumn::ReviewImgUrl => "review_img_url",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// SQL expression placed in ORDER BY
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::ReviewId => "reviews.review_id",
            SortColumn::Title => "reviews.title",
            SortColumn::Category => "reviews.category",
            SortColumn::Designer => "reviews.designer",
            SortColumn::Owner => "reviews.owner",
            SortColumn::ReviewBody => "reviews.review_body",
            SortColumn::ReviewImgUrl => "reviews.review_img_url",
            SortColumn::CreatedAt => "reviews.created_at",
            SortColumn::Votes => "reviews.votes",
            // output alias of the aggregate
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortColumn {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| ApiError::InvalidQuery("Invalid sort_by query".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ApiError::InvalidQuery("Invalid order query".to_string())),
        }
    }
}

/// Validated review listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewListParams {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub category: Option<String>,
    pub pagination: Pagination,
}

impl ReviewListParams {
    /// Validate in order: sort_by, order, then limit and page
    pub fn from_query(query: &ReviewListQuery) -> Result<Self, ApiError> {
        let sort_by = match query.sort_by.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortColumn::CreatedAt,
        };
        let order = match query.order.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortOrder::Desc,
        };
        let pagination = Pagination::parse(query.limit.as_deref(), query.p.as_deref())?;

        Ok(ReviewListParams {
            sort_by,
            order,
            category: query.category.clone().filter(|c| !c.is_empty()),
            pagination,
        })
    }

    /// Total rows matching the filter, ignoring pagination
    pub fn count_query(&self) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new(COUNT_SELECT);
        self.push_filter(&mut builder);
        builder
    }

    /// One page of review summaries with their comment counts
    pub fn page_query(&self) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new(LISTING_SELECT);
        self.push_filter(&mut builder);

        builder
            .push(" GROUP BY reviews.review_id ORDER BY ")
            .push(self.sort_by.as_sql())
            .push(" ")
            .push(self.order.as_sql());

        // stable order for ties
        if self.sort_by != SortColumn::ReviewId {
            builder.push(", reviews.review_id ASC");
        }

        builder
            .push(" LIMIT ")
            .push_bind(self.pagination.limit)
            .push(" OFFSET ")
            .push_bind(self.pagination.offset());

        builder
    }

    fn push_filter<'a>(&'a self, builder: &mut QueryBuilder<'a, Postgres>) {
        if let Some(category) = self.category.as_deref() {
            builder.push(" WHERE reviews.category = ").push_bind(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ReviewListQuery {
        let mut query = ReviewListQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "sort_by" => query.sort_by = value,
                "order" => query.order = value,
                "category" => query.category = value,
                "limit" => query.limit = value,
                "p" => query.p = value,
                _ => unreachable!(),
            }
        }
        query
    }

    #[test]
    fn test_defaults() {
        let params = ReviewListParams::from_query(&query(&[])).unwrap();
        assert_eq!(params.sort_by, SortColumn::CreatedAt);
        assert_eq!(params.order, SortOrder::Desc);
        assert_eq!(params.category, None);
        assert_eq!(params.pagination, Pagination { limit: 10, page: 1 });
    }

    #[test]
    fn test_every_allowed_column_parses() {
        for column in SortColumn::ALL {
            assert_eq!(column.name().parse::<SortColumn>().unwrap(), column);
        }
    }

    #[test]
    fn test_invalid_sort_by() {
        for raw in ["banana", "reviews.votes", "votes; DROP TABLE reviews", "VOTES", ""] {
            let err = ReviewListParams::from_query(&query(&[("sort_by", raw)])).unwrap_err();
            assert_eq!(err.to_string(), "Invalid sort_by query");
        }
    }

    #[test]
    fn test_invalid_order() {
        let err = ReviewListParams::from_query(&query(&[("order", "sideways")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid order query");
    }

    #[test]
    fn test_validation_order() {
        // sort_by is reported before order, order before pagination
        let err = ReviewListParams::from_query(&query(&[
            ("sort_by", "banana"),
            ("order", "sideways"),
            ("limit", "ten"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid sort_by query");

        let err = ReviewListParams::from_query(&query(&[("order", "sideways"), ("p", "x")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid order query");

        let err = ReviewListParams::from_query(&query(&[("p", "x")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Limit and page queries should be a number value"
        );
    }

    #[test]
    fn test_page_query_without_category() {
        let params = ReviewListParams::from_query(&query(&[("sort_by", "votes"), ("order", "asc")]))
            .unwrap();
        let builder = params.page_query();
        let sql = builder.sql();

        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("GROUP BY reviews.review_id ORDER BY reviews.votes ASC, reviews.review_id ASC"));
        assert!(sql.ends_with("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_page_query_binds_category() {
        let params = ReviewListParams::from_query(&query(&[
            ("category", "euro game'; DELETE FROM reviews; --"),
            ("sort_by", "comment_count"),
        ]))
        .unwrap();
        let builder = params.page_query();
        let sql = builder.sql();

        assert!(sql.contains("WHERE reviews.category = $1"));
        assert!(!sql.contains("euro game"));
        assert!(sql.contains("ORDER BY comment_count DESC"));
        assert!(sql.ends_with("LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn test_sort_by_review_id_has_no_tie_break() {
        let params = ReviewListParams::from_query(&query(&[("sort_by", "review_id")])).unwrap();
        let builder = params.page_query();
        assert!(builder.sql().contains("ORDER BY reviews.review_id DESC LIMIT"));
    }

    #[test]
    fn test_count_query_uses_same_filter() {
        let params = ReviewListParams::from_query(&query(&[("category", "dexterity")])).unwrap();
        let builder = params.count_query();
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM reviews WHERE reviews.category = $1"
        );

        let unfiltered = ReviewListParams::from_query(&query(&[])).unwrap();
        assert_eq!(unfiltered.count_query().sql(), "SELECT COUNT(*) FROM reviews");
    }

    #[test]
    fn test_empty_category_is_no_filter() {
        let params = ReviewListParams::from_query(&query(&[("category", "")])).unwrap();
        assert_eq!(params.category, None);
        assert_eq!(params.count_query().sql(), "SELECT COUNT(*) FROM reviews");
        assert!(!params.page_query().sql().contains("WHERE"));
    }
}
