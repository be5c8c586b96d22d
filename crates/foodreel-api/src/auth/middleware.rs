//! Auth gate middleware for the two principal types.
//!
//! Both gates share one extraction routine parameterized by cookie name:
//! the named cookie wins, and the `Authorization: Bearer` header is only
//! consulted when the cookie is absent. A malformed header counts as absent.

use crate::auth::models::{AuthenticatedFoodPartner, AuthenticatedUser};
use crate::auth::{PARTNER_TOKEN_COOKIE, USER_TOKEN_COOKIE};
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use foodreel_core::AppError;

/// Pull the session token from the named cookie, falling back to the
/// Authorization header.
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(cookie_header) = headers.get("Cookie").and_then(|h| h.to_str().ok()) {
        for pair in cookie_header.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == cookie_name && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok())?;
    match auth_header.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => {
            Some(token.to_string())
        }
        _ => None,
    }
}

fn no_token() -> HttpAppError {
    HttpAppError(AppError::Unauthorized(
        "Unauthorized Access - No Token".to_string(),
    ))
}

fn invalid_token() -> HttpAppError {
    HttpAppError(AppError::Unauthorized(
        "Unauthorized Access - Invalid Token".to_string(),
    ))
}

/// Gate requiring an end-user session.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpAppError> {
    let token = extract_token(request.headers(), USER_TOKEN_COOKIE).ok_or_else(no_token)?;
    let user_id = state.tokens.verify(&token).map_err(HttpAppError)?;

    let user = state
        .users
        .find_by_id(user_id)
        .await
        .map_err(HttpAppError)?
        .ok_or_else(|| {
            // Token is valid but the account is gone; outwardly identical to
            // a bad token so ids cannot be probed.
            tracing::debug!(user_id = %user_id, "Valid token for unknown user");
            invalid_token()
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(&user));
    Ok(next.run(request).await)
}

/// Gate requiring a food-partner session.
pub async fn require_food_partner(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpAppError> {
    let token = extract_token(request.headers(), PARTNER_TOKEN_COOKIE).ok_or_else(no_token)?;
    let partner_id = state.tokens.verify(&token).map_err(HttpAppError)?;

    let partner = state
        .food_partners
        .find_by_id(partner_id)
        .await
        .map_err(HttpAppError)?
        .ok_or_else(|| {
            tracing::debug!(partner_id = %partner_id, "Valid token for unknown food partner");
            invalid_token()
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedFoodPartner::from(&partner));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_cookie_wins_over_bearer() {
        let headers = headers(&[
            ("Cookie", "userToken=from-cookie; other=x"),
            ("Authorization", "Bearer from-header"),
        ]);
        assert_eq!(
            extract_token(&headers, "userToken").as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_bearer_used_when_cookie_absent() {
        let headers = headers(&[("Authorization", "Bearer abc.def.ghi")]);
        assert_eq!(
            extract_token(&headers, "userToken").as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_other_cookie_name_does_not_match() {
        let headers = headers(&[("Cookie", "foodPartnerToken=tok")]);
        assert_eq!(extract_token(&headers, "userToken"), None);
        assert_eq!(
            extract_token(&headers, "foodPartnerToken").as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_malformed_authorization_is_absent() {
        assert_eq!(
            extract_token(&headers(&[("Authorization", "Basic abc")]), "userToken"),
            None
        );
        assert_eq!(
            extract_token(&headers(&[("Authorization", "Bearer")]), "userToken"),
            None
        );
        assert_eq!(
            extract_token(
                &headers(&[("Authorization", "Bearer one two")]),
                "userToken"
            ),
            None
        );
    }

    #[test]
    fn test_no_headers_is_absent() {
        assert_eq!(extract_token(&HeaderMap::new(), "userToken"), None);
    }
}
