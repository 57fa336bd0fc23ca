//! HTTP route handlers for the site API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (database ping)
//!
//! # Lead applications
//! POST   /api/applications         - Submit a lead (public)
//! GET    /api/applications         - List leads (admin)
//! PATCH  /api/applications/{id}    - Update lead status (admin)
//! DELETE /api/applications/{id}    - Delete lead (admin)
//!
//! # Auth
//! POST /api/auth/login             - Login with email + password
//! POST /api/auth/logout            - Logout
//!
//! # Setup
//! POST /api/setup/admin            - Provision the first admin (open utility)
//! ```

pub mod applications;
pub mod auth;
pub mod setup;

use axum::{
    Router,
    routing::{patch, post},
};

use crate::state::AppState;

/// Create the lead application routes router.
pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(applications::submit).get(applications::list),
        )
        .route(
            "/{id}",
            patch(applications::update_status).delete(applications::delete),
        )
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all API routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/applications", application_routes())
        .nest("/api/auth", auth_routes())
        .route("/api/setup/admin", post(setup::provision_admin))
}
