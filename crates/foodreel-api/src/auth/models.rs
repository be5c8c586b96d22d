//! Authenticated principal context.
//!
//! These are the sanitized records the auth gate inserts into request
//! extensions. Neither type has a password hash field, so the hash cannot
//! reach handlers or responses.

use crate::error::HttpAppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use foodreel_core::models::{FoodPartner, User};
use foodreel_core::AppError;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        AuthenticatedUser {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthenticatedFoodPartner {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

impl From<&FoodPartner> for AuthenticatedFoodPartner {
    fn from(partner: &FoodPartner) -> Self {
        AuthenticatedFoodPartner {
            id: partner.id,
            full_name: partner.full_name.clone(),
            email: partner.email.clone(),
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Unauthorized Access - No Token".to_string(),
                ))
            })
    }
}

impl<S> FromRequestParts<S> for AuthenticatedFoodPartner
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedFoodPartner>()
            .cloned()
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Unauthorized Access - No Token".to_string(),
                ))
            })
    }
}
