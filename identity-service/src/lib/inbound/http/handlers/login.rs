use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequest;
use super::TokenResponseData;
use crate::identity::errors::IdentityError;
use crate::identity::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .credential_service
        .login(body.into())
        .await
        .map_err(|e| match e {
            // Unknown user, wrong password and malformed input share one response
            IdentityError::InvalidCredentials => {
                ApiError::Forbidden("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })
        .map(|token| ApiSuccess::new(StatusCode::CREATED, TokenResponseData { token }))
}
