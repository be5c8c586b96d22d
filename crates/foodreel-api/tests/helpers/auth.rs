//! Registration/login helpers for integration tests.

use axum_test::TestServer;
use serde_json::json;

pub struct TestPrincipal {
    pub token: String,
    pub email: String,
}

fn cookie_token(response: &axum_test::TestResponse, cookie_name: &str) -> String {
    response.cookie(cookie_name).value().to_string()
}

pub async fn register_test_user(client: &TestServer, email: &str) -> TestPrincipal {
    let response = client
        .post("/api/auth/user/register")
        .json(&json!({
            "fullName": "Test User",
            "email": email,
            "password": "hunter22",
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    TestPrincipal {
        token: cookie_token(&response, "userToken"),
        email: email.to_string(),
    }
}

pub async fn register_test_partner(client: &TestServer, email: &str) -> TestPrincipal {
    let response = client
        .post("/api/auth/foodPartner/register")
        .json(&json!({
            "fullName": "Test Partner",
            "email": email,
            "password": "hunter22",
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    TestPrincipal {
        token: cookie_token(&response, "foodPartnerToken"),
        email: email.to_string(),
    }
}
