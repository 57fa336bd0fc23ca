//! User repository for database operations.
//!
//! Rows are mapped into domain types at the boundary; invalid stored emails
//! or role tokens surface as `RepositoryError::DataCorruption` rather than
//! leaking raw strings into the domain.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use clearwell_core::{Email, UserId, UserRole};

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, role, created_at, updated_at
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Get a user together with their password hash, by email.
    ///
    /// Returns `None` if no user exists with that email. The hash stays in
    /// the auth service; it is never attached to the domain type.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, role, password_hash, created_at, updated_at
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = map_user(&row)?;
        let password_hash: String = row.try_get("password_hash")?;

        Ok(Some((user, password_hash)))
    }

    /// Create a new admin user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_admin(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO "user" (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(UserRole::Admin.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        map_user(&row)
    }

    /// Promote an existing user to admin.
    ///
    /// The name is replaced only when `name` is `Some`; the stored password
    /// is left untouched. Returns `None` if no user exists with that email,
    /// so the caller can fall back to creation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn promote_to_admin(
        &self,
        email: &Email,
        name: Option<&str>,
    ) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE "user"
            SET role = $2, name = COALESCE($3, name), updated_at = NOW()
            WHERE email = $1
            RETURNING id, name, email, role, created_at, updated_at
            "#,
        )
        .bind(email.as_str())
        .bind(UserRole::Admin.as_str())
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }
}

/// Map a user row into the domain type.
fn map_user(row: &PgRow) -> Result<User, RepositoryError> {
    let email_raw: String = row.try_get("email")?;
    let email = Email::parse(&email_raw).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
    })?;

    let role_raw: String = row.try_get("role")?;
    let role = role_raw.parse::<UserRole>().map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
    })?;

    Ok(User {
        id: UserId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        email,
        role,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
