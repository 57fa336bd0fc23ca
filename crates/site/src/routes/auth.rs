//! Authentication route handlers.
//!
//! JSON login/logout. Login failures are opaque: the response never reveals
//! whether the email exists.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Handle login.
///
/// POST /api/auth/login
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse> {
    let service = AuthService::new(state.pool());
    let user = service
        .login_with_password(&form.email, &form.password)
        .await?;

    let current = CurrentUser::from(&user);
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to write session: {e}")))?;

    tracing::info!(id = %user.id, "User logged in");

    Ok(Json(json!({
        "message": "Logged in",
        "user": current,
    })))
}

/// Handle logout.
///
/// POST /api/auth/logout
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Json(json!({ "message": "Logged out" })))
}
