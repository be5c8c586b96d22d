//! Route table and middleware layering.

use crate::auth::middleware::{require_food_partner, require_user};
use crate::handlers::{food_items, health, partner_auth, user_auth};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/user/register", post(user_auth::register))
        .route("/user/login", post(user_auth::login))
        .route("/user/logout", post(user_auth::logout))
        .route("/foodPartner/register", post(partner_auth::register))
        .route("/foodPartner/login", post(partner_auth::login))
        .route("/foodPartner/logout", get(partner_auth::logout));

    let food_create = Router::new()
        .route("/addFoodItem", post(food_items::add_food_item))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_food_partner,
        ));
    let food_read = Router::new()
        .route("/", get(food_items::list_food_items))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        .route("/", get(health::root))
        .nest("/api/auth", auth_routes)
        .nest("/api/food", food_create.merge(food_read))
        .layer(DefaultBodyLimit::max(state.config.max_video_size_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state))
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    if state.config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
