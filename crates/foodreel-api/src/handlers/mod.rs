pub mod food_items;
pub mod health;
pub mod partner_auth;
pub mod user_auth;

use foodreel_core::models::PrincipalData;
use serde::Serialize;

/// Common auth response body: `{message, success, data}`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub success: bool,
    pub data: PrincipalData,
}

/// Session cookie attributes shared by both principal types.
pub(crate) fn session_cookie(name: &str, token: &str, max_age_seconds: i64) -> String {
    format!("{name}={token}; HttpOnly; Path=/; Max-Age={max_age_seconds}; SameSite=Lax")
}

/// Expire the named cookie on the client. Tokens are stateless, so logout is
/// purely a client-side cookie clear.
pub(crate) fn clear_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("userToken", "abc", 86400);
        assert!(cookie.starts_with("userToken=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_cookie("foodPartnerToken");
        assert!(cookie.starts_with("foodPartnerToken=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
