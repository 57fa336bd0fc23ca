//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! cw-cli admin provision -e admin@example.com -n "Admin Name" -p secret123
//! ```
//!
//! Provisioning is promote-or-create: if a user with the email already
//! exists it is promoted to ADMIN and its password stays untouched;
//! otherwise a fresh ADMIN account is created with the given password.
//!
//! # Environment Variables
//!
//! - `SITE_DATABASE_URL` - `PostgreSQL` connection string for the site

use clearwell_site::services::SetupService;

use super::CommandError;

/// Provision an admin account.
///
/// # Errors
///
/// Returns an error if validation fails (empty fields, short password,
/// malformed email) or the database is unreachable.
pub async fn provision(email: &str, name: &str, password: &str) -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Provisioning admin: {}", email);

    let service = SetupService::new(&pool);
    let user = service.provision_admin(name, email, password).await?;

    tracing::info!(
        "Admin provisioned! ID: {}, Email: {}, Role: {}",
        user.id,
        user.email,
        user.role
    );

    Ok(())
}
