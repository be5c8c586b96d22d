//! Session token codec.
//!
//! Tokens are HS256 JWTs carrying only the principal id and the issue/expiry
//! timestamps. Verification is all-or-nothing: a bad signature, malformed
//! payload, or elapsed expiry all collapse to the same unauthorized error.

use chrono::Utc;
use foodreel_core::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl TokenCodec {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        TokenCodec {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Mint a session token for a principal.
    pub fn mint(&self, principal_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: principal_id,
            iat: now,
            exp: now + self.expiry_hours * 3600,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return the principal id it was minted for.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Unauthorized Access - Invalid Token".to_string()))
    }

    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_hours * 3600
    }
}
