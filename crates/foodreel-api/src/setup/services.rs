//! Wiring of concrete services into application state.

use crate::state::AppState;
use anyhow::Result;
use foodreel_core::Config;
use foodreel_storage::{CloudinaryStorage, VideoStorage};
use std::sync::Arc;

/// Build production state. Credentials are checked here, once, so a
/// misconfigured process never starts accepting uploads.
pub fn build_state(config: Config) -> Result<AppState> {
    let storage = CloudinaryStorage::from_config(&config)?;
    tracing::info!(cloud_name = %storage.cloud_name(), "Video storage configured");
    Ok(AppState::new(config, Arc::new(storage)))
}
