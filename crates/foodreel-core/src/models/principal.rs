//! Principal entities: end users and food partners.
//!
//! Both principal types carry a password hash that must never cross the system
//! boundary. Outward-facing representations go through [`PrincipalData`], which
//! has no hash field at all, so stripping is enforced by the type system rather
//! than by remembering to delete a field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// End-user principal. Email is stored lowercase; uniqueness is enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Food-partner principal. Same shape as [`User`] but a distinct identity type:
/// the two live in separate stores and authenticate through separate gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPartner {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sanitized principal representation for responses and request contexts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalData {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
}

impl From<&User> for PrincipalData {
    fn from(user: &User) -> Self {
        PrincipalData {
            id: user.id,
            fullname: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&FoodPartner> for PrincipalData {
    fn from(partner: &FoodPartner) -> Self {
        PrincipalData {
            id: partner.id,
            fullname: partner.full_name.clone(),
            email: partner.email.clone(),
        }
    }
}
