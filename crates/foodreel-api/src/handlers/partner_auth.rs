//! Food-partner auth endpoints: register, login, logout.

use crate::auth::PARTNER_TOKEN_COOKIE;
use crate::error::HttpAppError;
use crate::handlers::user_auth::{LoginRequest, RegisterRequest};
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

    let hasher = state.password_hasher.clone();
    let password = body.password.clone();
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Hash task failed: {}", e)))??;

    let partner = state
        .food_partners
        .create(&body.full_name, &body.email, &hash)
        .await?;
    let token = state.tokens.mint(partner.id)?;

    tracing::info!(partner_id = %partner.id, "Food partner registered");

    Ok((
        StatusCode::CREATED,
        [(
            header::SET_COOKIE,
            session_cookie(PARTNER_TOKEN_COOKIE, &token, state.tokens.expiry_seconds()),
        )],
        Json(AuthResponse {
            message: "Food partner registered successfully".to_string(),
            success: true,
            data: PrincipalData::from(&partner),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let partner = state
        .food_partners
        .find_by_email(&body.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let hasher = state.password_hasher.clone();
    let password = body.password.clone();
    let hash = partner.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verify task failed: {}", e)))??;
    if !valid {
        return Err(HttpAppError(invalid_credentials()));
    }

    let token = state.tokens.mint(partner.id)?;

    tracing::info!(partner_id = %partner.id, "Food partner logged in");

    Ok((
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            session_cookie(PARTNER_TOKEN_COOKIE, &token, state.tokens.expiry_seconds()),
        )],
        Json(AuthResponse {
            message: "Food partner logged in successfully".to_string(),
            success: true,
            data: PrincipalData::from(&partner),
        }),
    ))
}

pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_cookie(PARTNER_TOKEN_COOKIE))],
        Json(serde_json::json!({
            "message": "Food partner logged out successfully",
            "success": true,
        })),
    )
}

fn invalid_credentials() -> AppError {
    AppError::Validation("Invalid email or password".to_string())
}
