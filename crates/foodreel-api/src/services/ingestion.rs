//! Food item ingestion workflow.
//!
//! Validate the request, hand the staged file to the upload pipeline, persist
//! the record, and remove the staged file before returning on every path.

use crate::error::storage_to_app;
use crate::services::staging::StagedFile;
use foodreel_core::models::FoodItem;
use foodreel_core::AppError;
use foodreel_db::store::{FoodItemRepository, FoodPartnerRepository};
use foodreel_storage::UploadPipeline;
use std::path::Path;
use uuid::Uuid;

/// Incoming fields of an add-food-item request, already pulled out of the
/// multipart body.
pub struct FoodItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub content_type: String,
}

/// Workflow result: the persisted record plus the remote object id.
#[derive(Debug)]
pub struct IngestedFoodItem {
    pub item: FoodItem,
    pub video_id: String,
}

#[derive(Clone)]
pub struct IngestionService {
    food_partners: FoodPartnerRepository,
    food_items: FoodItemRepository,
    pipeline: UploadPipeline,
}

impl IngestionService {
    pub fn new(
        food_partners: FoodPartnerRepository,
        food_items: FoodItemRepository,
        pipeline: UploadPipeline,
    ) -> Self {
        IngestionService {
            food_partners,
            food_items,
            pipeline,
        }
    }

    /// Run the full workflow. The staged file is removed before this returns,
    /// whatever the outcome; `StagedFile`'s drop guard covers panics.
    pub async fn ingest(
        &self,
        partner_id: Uuid,
        draft: FoodItemDraft,
        staged: StagedFile,
    ) -> Result<IngestedFoodItem, AppError> {
        let outcome = self.process(partner_id, &draft, staged.path()).await;
        staged.remove().await;
        outcome
    }

    async fn process(
        &self,
        partner_id: Uuid,
        draft: &FoodItemDraft,
        staged_path: &Path,
    ) -> Result<IngestedFoodItem, AppError> {
        // The gate already authenticated the partner; re-check the account in
        // case it disappeared between gate and workflow.
        self.food_partners
            .find_by_id(partner_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Food partner account not found".to_string()))?;

        if draft.name.trim().is_empty() {
            return Err(AppError::Validation("`name` is required.".to_string()));
        }
        if !draft.content_type.starts_with("video/") {
            return Err(AppError::Validation(format!(
                "Expected a video file, got `{}`",
                draft.content_type
            )));
        }

        let folder = format!("food_videos/{}", partner_id);
        let uploaded = self
            .pipeline
            .upload_video(staged_path, &folder)
            .await
            .map_err(storage_to_app)?;

        tracing::info!(
            partner_id = %partner_id,
            public_id = %uploaded.public_id,
            "Video uploaded, persisting food item"
        );

        let item = self
            .food_items
            .create(FoodItem::new(
                draft.name.trim().to_string(),
                draft
                    .description
                    .clone()
                    .filter(|d| !d.trim().is_empty()),
                uploaded.url,
                partner_id,
            ))
            .await?;

        Ok(IngestedFoodItem {
            item,
            video_id: uploaded.public_id,
        })
    }
}
