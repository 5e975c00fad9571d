// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Expose the service modules to the binary and to integration tests

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
