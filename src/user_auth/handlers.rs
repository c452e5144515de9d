use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;
use std::sync::Arc;

use super::service::AuthError;
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResult, TokenBody, ok};

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Issue a bearer token
///
/// POST /auth/token
///
/// Any username is accepted - there is no identity store behind this
/// endpoint. A missing body, missing field or empty username all map to
/// the same 400.
pub async fn generate_token(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> ApiResult<TokenBody> {
    let username = payload
        .ok()
        .and_then(|Json(req)| req.username)
        .unwrap_or_default();

    match state.token_service.issue(&username) {
        Ok(token) => ok(TokenBody {
            success: true,
            token,
            expires_in: "24h".to_string(),
        }),
        Err(AuthError::MissingSubject) => ApiError::bad_request("Username required").into_err(),
        Err(e) => {
            tracing::error!("Token generation failed: {:?}", e);
            ApiError::internal("Failed to generate token").into_err()
        }
    }
}
