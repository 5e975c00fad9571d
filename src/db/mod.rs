// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod category_repository;
pub mod comment_repository;
pub mod exists;
pub mod review_query;
pub mod review_repository;
pub mod user_repository;

pub use category_repository::*;
pub use comment_repository::*;
pub use exists::*;
pub use review_query::*;
pub use review_repository::*;
pub use user_repository::*;
