//! Lead application route handlers.
//!
//! Submission is public; listing and mutation require an admin session via
//! the `RequireAdmin` extractor on every guarded handler.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use clearwell_core::ApplicationId;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalUser, RequireAdmin};
use crate::services::LeadService;
use crate::state::AppState;

/// Lead submission form data.
///
/// Fields default to empty so a missing name/phone fails our validation
/// with a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    #[serde(default)]
    pub status: String,
}

/// Submit a lead application.
///
/// POST /api/applications (public)
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn submit(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Json(form): Json<SubmitForm>,
) -> Result<impl IntoResponse> {
    let service = LeadService::new(state.pool());

    let application = service
        .submit(
            &form.name,
            &form.phone,
            form.comment.as_deref(),
            user.map(|u| u.id),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Application submitted",
            "application": application,
        })),
    ))
}

/// List all lead applications, newest first.
///
/// GET /api/applications (admin)
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let service = LeadService::new(state.pool());
    let applications = service.list().await?;
    Ok(Json(applications))
}

/// Update the status of a lead application.
///
/// PATCH /api/applications/{id} (admin)
#[instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn update_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<UpdateStatusForm>,
) -> Result<impl IntoResponse> {
    let id = parse_application_id(&id)?;

    let service = LeadService::new(state.pool());
    let application = service.update_status(id, &form.status).await?;

    Ok(Json(json!({
        "message": "Application status updated",
        "application": application,
    })))
}

/// Permanently delete a lead application.
///
/// DELETE /api/applications/{id} (admin)
#[instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_application_id(&id)?;

    let service = LeadService::new(state.pool());
    service.delete(id).await?;

    Ok(Json(json!({ "message": "Application deleted" })))
}

/// Parse a path id, rejecting anything that is not a positive integer.
fn parse_application_id(raw: &str) -> Result<ApplicationId> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .map(ApplicationId::new)
        .ok_or_else(|| AppError::Validation("Invalid application id".to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_application_id_accepts_positive_integers() {
        assert_eq!(parse_application_id("42").unwrap(), ApplicationId::new(42));
    }

    #[test]
    fn test_parse_application_id_rejects_garbage() {
        for raw in ["", "abc", "1.5", "-3", "0", "1; DROP TABLE application"] {
            assert!(parse_application_id(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_submit_form_defaults_missing_fields_to_empty() {
        // Missing phone deserializes to "" and later fails validation with
        // a 400 rather than a deserialization rejection.
        let form: SubmitForm = serde_json::from_str(r#"{"name":"Ivan"}"#).unwrap();
        assert_eq!(form.name, "Ivan");
        assert!(form.phone.is_empty());
        assert!(form.comment.is_none());
    }

    #[test]
    fn test_update_status_form_defaults_to_empty() {
        let form: UpdateStatusForm = serde_json::from_str("{}").unwrap();
        assert!(form.status.is_empty());
    }
}
