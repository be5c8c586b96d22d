//! End-user auth endpoints: register, login, logout.

use crate::auth::USER_TOKEN_COOKIE;
use crate::error::HttpAppError;
use crate::handlers::{clear_cookie, session_cookie, AuthResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use foodreel_core::models::PrincipalData;
use foodreel_core::AppError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if body.full_name.trim().is_empty()
        || body.email.trim().is_empty()
        || body.password.trim().is_empty()
    {
        return Err(HttpAppError(AppError::Validation(
            "All fields are required".to_string(),
        )));
    }

    // bcrypt is CPU-bound; keep it off the async workers.
    let hasher = state.password_hasher.clone();
    let password = body.password.clone();
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Hash task failed: {}", e)))??;

    let user = state
        .users
        .create(&body.full_name, &body.email, &hash)
        .await?;
    let token = state.tokens.mint(user.id)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        [(
            header::SET_COOKIE,
            session_cookie(USER_TOKEN_COOKIE, &token, state.tokens.expiry_seconds()),
        )],
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            success: true,
            data: PrincipalData::from(&user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user = state
        .users
        .find_by_email(&body.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let hasher = state.password_hasher.clone();
    let password = body.password.clone();
    let hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verify task failed: {}", e)))??;
    if !valid {
        return Err(HttpAppError(invalid_credentials()));
    }

    let token = state.tokens.mint(user.id)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            session_cookie(USER_TOKEN_COOKIE, &token, state.tokens.expiry_seconds()),
        )],
        Json(AuthResponse {
            message: "User logged in successfully".to_string(),
            success: true,
            data: PrincipalData::from(&user),
        }),
    ))
}

pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_cookie(USER_TOKEN_COOKIE))],
        Json(serde_json::json!({
            "message": "User logged out successfully",
            "success": true,
        })),
    )
}

/// Unknown email and wrong password collapse to one message so accounts
/// cannot be enumerated.
fn invalid_credentials() -> AppError {
    AppError::Validation("Invalid email or password".to_string())
}
