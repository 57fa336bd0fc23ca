//! Integration tests for ClearWell Drilling.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL, then run migrations
//! cargo run -p clearwell-cli -- migrate
//!
//! # Start the site
//! cargo run -p clearwell-site
//!
//! # Run the integration tests
//! cargo test -p clearwell-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a running site over HTTP and expect an empty-ish
//! database; they provision their own admin account via `/api/setup/admin`.

use reqwest::Client;

/// Base URL for the site API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client with a cookie store for session handling.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
