use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    state
        .credential_service
        .list_usernames()
        .await
        .map_err(ApiError::from)
        .map(|usernames| {
            ApiSuccess::new(
                StatusCode::OK,
                usernames.into_iter().map(|u| u.into_inner()).collect(),
            )
        })
}
