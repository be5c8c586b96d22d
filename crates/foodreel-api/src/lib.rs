//! HTTP surface for the food video backend: session tokens, auth gates for
//! the two principal types, food item ingestion, and server setup.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::HttpAppError;
pub use state::AppState;
