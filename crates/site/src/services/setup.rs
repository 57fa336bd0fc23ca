//! Admin provisioning (bootstrap).
//!
//! One explicit policy for every entry point (HTTP route and CLI): if a user
//! with the given email already exists it is promoted to admin, otherwise a
//! new admin account is created. Idempotent with respect to role.

use sqlx::PgPool;
use thiserror::Error;

use clearwell_core::Email;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;
use crate::services::auth::{self, AuthError};

/// Errors from admin provisioning.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

/// Admin provisioning service.
pub struct SetupService<'a> {
    users: UserRepository<'a>,
}

impl<'a> SetupService<'a> {
    /// Create a new setup service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Provision an admin account: promote-or-create by email.
    ///
    /// The returned user never carries the password hash.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::Validation` if any field is empty, the password
    /// is shorter than six characters, or the email is not shaped like
    /// `local@domain.tld`.
    pub async fn provision_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, SetupError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(SetupError::Validation(
                "Name, email and password are required".to_owned(),
            ));
        }

        auth::validate_password(password).map_err(|e| match e {
            AuthError::WeakPassword(msg) => SetupError::Validation(msg),
            _ => SetupError::PasswordHash,
        })?;

        let email = Email::parse(email)
            .map_err(|e| SetupError::Validation(format!("invalid email: {e}")))?;

        let password_hash = auth::hash_password(password).map_err(|_| SetupError::PasswordHash)?;

        // Promote first; fall back to creation when the email is unknown.
        if let Some(user) = self.users.promote_to_admin(&email, Some(name)).await? {
            tracing::info!(id = %user.id, email = %user.email, "Existing user promoted to admin");
            return Ok(user);
        }

        let user = self.users.create_admin(name, &email, &password_hash).await?;
        tracing::info!(id = %user.id, email = %user.email, "Admin user created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    // Validation happens before any database access, so it is exercised with
    // a disconnected pool: the future must fail with Validation without ever
    // touching the store. Pool construction is lazy in sqlx, which makes
    // this safe.
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/clearwell_test_never_connects")
            .expect("lazy pool")
    }

    #[tokio::test]
    async fn test_provision_rejects_empty_fields() {
        let pool = lazy_pool();
        let setup = SetupService::new(&pool);

        for (name, email, password) in [
            ("", "a@b.com", "secret123"),
            ("Admin", "", "secret123"),
            ("Admin", "a@b.com", ""),
        ] {
            let err = setup.provision_admin(name, email, password).await;
            assert!(matches!(err, Err(SetupError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_provision_rejects_short_password() {
        let pool = lazy_pool();
        let setup = SetupService::new(&pool);

        let err = setup.provision_admin("Admin", "a@b.com", "12345").await;
        assert!(matches!(err, Err(SetupError::Validation(_))));
    }

    #[tokio::test]
    async fn test_provision_rejects_bad_email_shape() {
        let pool = lazy_pool();
        let setup = SetupService::new(&pool);

        for email in ["not-an-email", "user@", "@domain.com", "user@domain"] {
            let err = setup.provision_admin("Admin", email, "secret123").await;
            assert!(matches!(err, Err(SetupError::Validation(_))), "{email}");
        }
    }
}
