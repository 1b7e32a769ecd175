use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::identity::models::Username;
use crate::domain::identity::ports::CredentialServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(username): Path<String>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body?;
    let username = Username::new(username);

    tracing::info!(actor = %subject.username, target = %username, "Password change requested");

    // An absent password fails the strength policy after the lookup, like any weak one
    let new_password = body.password.unwrap_or_default();

    state
        .credential_service
        .change_password(&username, &new_password)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

/// HTTP request body for a password change.
///
/// The field is optional so an omitted or null password reaches the strength policy.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequest {
    password: Option<String>,
}
