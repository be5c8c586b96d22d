use axum::Json;
use serde_json::{json, Value};

/// Liveness endpoint at the root.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Food video service is running",
        "success": true,
    }))
}
