//! Lead workflow: create, list, update status, delete.
//!
//! Submission is open to anonymous visitors; listing and mutation are
//! admin-only (enforced at the route layer via the `RequireAdmin`
//! extractor). Validation and not-found conditions are detected here;
//! storage faults bubble up as repository errors.

use sqlx::PgPool;
use thiserror::Error;

use clearwell_core::{ApplicationId, ApplicationStatus, UserId};

use crate::db::RepositoryError;
use crate::db::applications::{ApplicationRepository, NewApplication};
use crate::models::{Application, ApplicationWithUser};

/// Errors from the lead workflow.
#[derive(Debug, Error)]
pub enum LeadError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Repository/database error (including not-found).
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Lead workflow service.
pub struct LeadService<'a> {
    applications: ApplicationRepository<'a>,
}

impl<'a> LeadService<'a> {
    /// Create a new lead service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            applications: ApplicationRepository::new(pool),
        }
    }

    /// Submit a new lead application. Public, no auth.
    ///
    /// `submitter` is the optional session user id; anonymous submissions
    /// pass `None`. The created record always starts as PENDING.
    ///
    /// # Errors
    ///
    /// Returns `LeadError::Validation` if name or phone is empty after
    /// trimming.
    pub async fn submit(
        &self,
        name: &str,
        phone: &str,
        comment: Option<&str>,
        submitter: Option<UserId>,
    ) -> Result<Application, LeadError> {
        let (name, phone) = validate_submission(name, phone)?;
        let comment = comment.map(str::trim).filter(|c| !c.is_empty());

        let application = self
            .applications
            .create(NewApplication {
                name,
                phone,
                comment,
                user_id: submitter,
            })
            .await?;

        tracing::info!(id = %application.id, "Lead application submitted");
        Ok(application)
    }

    /// List all applications, newest first, with linked user info.
    ///
    /// # Errors
    ///
    /// Returns `LeadError::Repository` if the query fails.
    pub async fn list(&self) -> Result<Vec<ApplicationWithUser>, LeadError> {
        Ok(self.applications.list_with_users().await?)
    }

    /// Update the status of an application.
    ///
    /// `status` is the raw wire token; anything outside the four valid
    /// tokens is rejected before touching the store. There is no
    /// transition-graph restriction: any status may move to any other.
    ///
    /// # Errors
    ///
    /// Returns `LeadError::Validation` for an unknown status token and
    /// `LeadError::Repository(NotFound)` if no application has that id.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        status: &str,
    ) -> Result<Application, LeadError> {
        let status = status
            .parse::<ApplicationStatus>()
            .map_err(|e| LeadError::Validation(e.to_string()))?;

        let application = self.applications.update_status(id, status).await?;

        tracing::info!(id = %application.id, status = %application.status, "Lead status updated");
        Ok(application)
    }

    /// Permanently delete an application.
    ///
    /// # Errors
    ///
    /// Returns `LeadError::Repository(NotFound)` if no application has that
    /// id.
    pub async fn delete(&self, id: ApplicationId) -> Result<(), LeadError> {
        self.applications.delete(id).await?;

        tracing::info!(%id, "Lead application deleted");
        Ok(())
    }
}

/// Validate and trim a submission's required fields.
fn validate_submission<'v>(name: &'v str, phone: &'v str) -> Result<(&'v str, &'v str), LeadError> {
    let name = name.trim();
    let phone = phone.trim();

    if name.is_empty() || phone.is_empty() {
        return Err(LeadError::Validation(
            "Name and phone are required".to_owned(),
        ));
    }

    Ok((name, phone))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_submission_trims() {
        let (name, phone) = validate_submission("  Иван Петров ", " +7 999 123-45-67 ").unwrap();
        assert_eq!(name, "Иван Петров");
        assert_eq!(phone, "+7 999 123-45-67");
    }

    #[test]
    fn test_validate_submission_rejects_empty_name() {
        assert!(validate_submission("", "+7 999 123-45-67").is_err());
        assert!(validate_submission("   ", "+7 999 123-45-67").is_err());
    }

    #[test]
    fn test_validate_submission_rejects_empty_phone() {
        assert!(validate_submission("Иван", "").is_err());
        assert!(validate_submission("Иван", "  ").is_err());
    }

    #[test]
    fn test_phone_is_free_form() {
        // No format enforced beyond presence.
        assert!(validate_submission("Ivan", "call me maybe").is_ok());
    }
}
