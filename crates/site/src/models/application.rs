//! Lead application domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use clearwell_core::{ApplicationId, ApplicationStatus, UserId};

/// A lead application: a service request submitted through the contact form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application ID.
    pub id: ApplicationId,
    /// Requester's name.
    pub name: String,
    /// Requester's phone number (free-form).
    pub phone: String,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// Current processing status.
    pub status: ApplicationStatus,
    /// Submitting user, if the visitor was logged in. Weak reference:
    /// deleting the user nulls this, never the application.
    pub user_id: Option<UserId>,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
    /// When the application was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Name and email of the user linked to an application, joined for listings.
#[derive(Debug, Clone, Serialize)]
pub struct LinkedUser {
    pub name: String,
    pub email: String,
}

/// An application together with its linked user, as returned by the admin
/// listing.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithUser {
    #[serde(flatten)]
    pub application: Application,
    /// `None` for anonymous submissions.
    pub user: Option<LinkedUser>,
}
