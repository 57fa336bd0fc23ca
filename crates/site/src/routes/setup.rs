//! Admin bootstrap route handler.
//!
//! Open first-run utility: provisions (or promotes) an admin account. The
//! same `SetupService` backs the CLI, so both entry points share one
//! promote-on-duplicate policy.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::Result;
use crate::services::SetupService;
use crate::state::AppState;

/// Admin provisioning form data.
#[derive(Debug, Deserialize)]
pub struct ProvisionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Provision an admin account.
///
/// POST /api/setup/admin
#[instrument(skip(state, form))]
pub async fn provision_admin(
    State(state): State<AppState>,
    Json(form): Json<ProvisionForm>,
) -> Result<impl IntoResponse> {
    let service = SetupService::new(state.pool());
    let user = service
        .provision_admin(&form.name, &form.email, &form.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Admin provisioned",
            "user": user,
        })),
    ))
}
