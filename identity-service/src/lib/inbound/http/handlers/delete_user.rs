use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::identity::models::Username;
use crate::domain::identity::ports::CredentialServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiError> {
    let username = Username::new(username);

    tracing::info!(actor = %subject.username, target = %username, "Delete requested");

    state
        .credential_service
        .delete(&username)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
