//! Lead application repository for database operations.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use clearwell_core::{ApplicationId, ApplicationStatus, UserId};

use super::RepositoryError;
use crate::models::{Application, ApplicationWithUser, LinkedUser};

/// Input for creating a new application. Validation happens in the lead
/// service; by the time this reaches the repository the fields are trimmed
/// and non-empty.
#[derive(Debug)]
pub struct NewApplication<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub comment: Option<&'a str>,
    pub user_id: Option<UserId>,
}

/// Repository for lead application database operations.
pub struct ApplicationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ApplicationRepository<'a> {
    /// Create a new application repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new application with status PENDING.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        new: NewApplication<'_>,
    ) -> Result<Application, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO application (name, phone, comment, status, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone, comment, status, user_id, created_at, updated_at
            "#,
        )
        .bind(new.name)
        .bind(new.phone)
        .bind(new.comment)
        .bind(ApplicationStatus::Pending.as_str())
        .bind(new.user_id.map(|id| id.as_i32()))
        .fetch_one(self.pool)
        .await?;

        map_application(&row)
    }

    /// List all applications, newest first, each joined with its linked
    /// user's name and email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn list_with_users(&self) -> Result<Vec<ApplicationWithUser>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.name, a.phone, a.comment, a.status, a.user_id,
                   a.created_at, a.updated_at,
                   u.name AS user_name, u.email AS user_email
            FROM application a
            LEFT JOIN "user" u ON a.user_id = u.id
            ORDER BY a.created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let application = map_application(row)?;

            let user_name: Option<String> = row.try_get("user_name")?;
            let user_email: Option<String> = row.try_get("user_email")?;
            let user = match (user_name, user_email) {
                (Some(name), Some(email)) => Some(LinkedUser { name, email }),
                _ => None,
            };

            entries.push(ApplicationWithUser { application, user });
        }

        Ok(entries)
    }

    /// Set the status of an application and return the updated record.
    ///
    /// A single conditional update: concurrent writers resolve to
    /// last-writer-wins at the storage layer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no application has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE application
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, phone, comment, status, user_id, created_at, updated_at
            "#,
        )
        .bind(id.as_i32())
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        map_application(&row)
    }

    /// Permanently delete an application. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no application has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ApplicationId) -> Result<(), RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM application WHERE id = $1"#)
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map an application row into the domain type.
fn map_application(row: &PgRow) -> Result<Application, RepositoryError> {
    let status_raw: String = row.try_get("status")?;
    let status = status_raw.parse::<ApplicationStatus>().map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid status in database: {e}"))
    })?;

    let user_id: Option<i32> = row.try_get("user_id")?;

    Ok(Application {
        id: ApplicationId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        comment: row.try_get("comment")?,
        status,
        user_id: user_id.map(UserId::new),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
