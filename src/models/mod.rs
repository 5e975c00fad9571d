// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod category;
pub mod comment;
pub mod pagination;
pub mod review;
pub mod user;
pub mod votes;

pub use category::*;
pub use comment::*;
pub use pagination::*;
pub use review::*;
pub use user::*;
pub use votes::*;
