//! Shared application state handed to every handler and middleware.

use crate::auth::token::TokenCodec;
use crate::services::IngestionService;
use foodreel_core::Config;
use foodreel_db::store::{FoodItemRepository, FoodPartnerRepository, UserRepository};
use foodreel_db::PasswordHasher;
use foodreel_storage::{UploadPipeline, VideoStorage};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: UserRepository,
    pub food_partners: FoodPartnerRepository,
    pub food_items: FoodItemRepository,
    pub password_hasher: PasswordHasher,
    pub tokens: TokenCodec,
    pub ingestion: IngestionService,
}

impl AppState {
    /// Build state over a concrete storage backend. The production backend is
    /// wired in setup; tests inject their own.
    pub fn new(config: Config, storage: Arc<dyn VideoStorage>) -> Self {
        let tokens = TokenCodec::new(&config.jwt_secret, config.jwt_expiry_hours);
        let food_partners = FoodPartnerRepository::new();
        let food_items = FoodItemRepository::new();
        let ingestion = IngestionService::new(
            food_partners.clone(),
            food_items.clone(),
            UploadPipeline::new(storage),
        );
        AppState {
            config: Arc::new(config),
            users: UserRepository::new(),
            food_partners,
            food_items,
            password_hasher: PasswordHasher::default(),
            tokens,
            ingestion,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.upload_dir)
    }
}
