// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod comment_service;
pub mod review_service;

pub use comment_service::*;
pub use review_service::*;
