//! Catalog Backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// HTTP routes
pub mod routes;

/// Server setup
pub mod server;

/// Shared request and response types
pub mod types;
